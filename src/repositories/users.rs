use crate::common::context::Context;
use crate::entities::users::User;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, username, password_hash, created_at";

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_by_username<C: Context>(ctx: &C, username: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE username = ?"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(
    ctx: &C,
    username: &str,
    password_hash: &str,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (username, password_hash) VALUES (?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(username)
        .bind(password_hash)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id() as i64)
}

/// Likes and friendship edges are removed by the FK cascade.
pub async fn delete<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let result = sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}
