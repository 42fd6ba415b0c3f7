use crate::common::context::Context;
use crate::entities::friendships::Friendship;
use crate::entities::users::User;

const TABLE_NAME: &str = "friendships";
const READ_FIELDS: &str = "user_id, friend_id, is_accepted";

/// Looks up the edge between a pair of users in either direction. The
/// unordered-pair invariant guarantees at most one row matches.
pub async fn fetch_between<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> sqlx::Result<Option<Friendship>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(other_id)
        .bind(other_id)
        .bind(user_id)
        .fetch_optional(ctx.db())
        .await
}

/// Inserts a pending edge. A duplicate-key violation here means a concurrent
/// request for the same pair won the race; the caller maps it to a conflict.
pub async fn create_pending<C: Context>(
    ctx: &C,
    requester_id: i64,
    target_id: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, friend_id, is_accepted) VALUES (?, ?, FALSE)"
    );
    sqlx::query(QUERY)
        .bind(requester_id)
        .bind(target_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

/// Flips the pending edge sent by `sender_id` to `accepter_id`. Acceptance
/// direction is fixed: only the original recipient may accept. Returns the
/// number of rows updated (0 when no such pending edge exists).
pub async fn accept<C: Context>(ctx: &C, sender_id: i64, accepter_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_accepted = TRUE",
        " WHERE user_id = ? AND friend_id = ? AND is_accepted IS FALSE"
    );
    let result = sqlx::query(QUERY)
        .bind(sender_id)
        .bind(accepter_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// All users connected to `user_id` by an accepted edge, in either role,
/// resolved to the other party of each edge.
pub async fn fetch_friends<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.id, u.username, u.password_hash, u.created_at FROM ",
        TABLE_NAME,
        " f INNER JOIN users u",
        " ON u.id = IF(f.user_id = ?, f.friend_id, f.user_id)",
        " WHERE (f.user_id = ? OR f.friend_id = ?) AND f.is_accepted IS TRUE"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// All users with an undecided request sent to `user_id`.
pub async fn fetch_incoming<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.id, u.username, u.password_hash, u.created_at FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.user_id",
        " WHERE f.friend_id = ? AND f.is_accepted IS FALSE"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// Deletes the edge between the pair regardless of direction or state.
/// Returns the number of rows removed.
pub async fn delete_between<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(other_id)
        .bind(other_id)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
