use sqlx::FromRow;

/// A friendship edge. `user_id` sent the request, `friend_id` received it.
/// At most one edge exists per unordered pair of users.
#[derive(Debug, FromRow)]
pub struct Friendship {
    pub user_id: i64,
    pub friend_id: i64,
    pub is_accepted: bool,
}
