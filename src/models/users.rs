use crate::entities::users::User as UserEntity;
use serde::{Deserialize, Serialize};

/// Public view of a user. The credential hash never leaves the entity.
#[derive(Debug, Serialize)]
pub struct User {
    #[serde(rename = "id")]
    pub user_id: i64,
    pub username: String,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.id,
            username: value.username,
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterArgs {
    pub username: String,
    pub password: String,
}
