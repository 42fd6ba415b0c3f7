use crate::entities::sessions::Session as SessionEntity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub username: String,
}

impl From<SessionEntity> for Session {
    fn from(value: SessionEntity) -> Self {
        Self {
            session_id: value.session_id,
            user_id: value.user_id,
            username: value.username,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: Uuid,
    pub token_type: &'static str,
}

impl LoginResponse {
    pub const fn bearer(access_token: Uuid) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}
