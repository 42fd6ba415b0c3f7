use crate::common::context::Context;
use crate::entities::movies::Movie;

const TABLE_NAME: &str = "likes";

/// Idempotent set membership: returns true if the like was newly recorded,
/// false if this (user, movie) pair was already present.
pub async fn create<C: Context>(ctx: &C, user_id: i64, movie_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "INSERT IGNORE INTO ",
        TABLE_NAME,
        " (user_id, movie_id) VALUES (?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(movie_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn fetch_user_movies<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Vec<Movie>> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.movie_name, m.poster_path FROM ",
        TABLE_NAME,
        " l INNER JOIN movies m ON m.id = l.movie_id WHERE l.user_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

/// The intersection of both users' liked-movie sets.
pub async fn fetch_common_movies<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<Vec<Movie>> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.movie_name, m.poster_path FROM movies m ",
        "INNER JOIN ",
        TABLE_NAME,
        " l1 ON l1.movie_id = m.id AND l1.user_id = ? ",
        "INNER JOIN ",
        TABLE_NAME,
        " l2 ON l2.movie_id = m.id AND l2.user_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .fetch_all(ctx.db())
        .await
}
