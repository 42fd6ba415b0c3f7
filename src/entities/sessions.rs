use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn is_expired(&self, ttl: std::time::Duration) -> bool {
        let age = chrono::Utc::now() - self.created_at;
        age.to_std().is_ok_and(|age| age > ttl)
    }
}

pub struct CreateSessionArgs {
    pub user_id: i64,
    pub username: String,
}
