use crate::common::context::Context;

const TABLE_NAME: &str = "movies";

/// Lazy import keyed by the external catalog id. A concurrent insert of the
/// same id is absorbed by the upsert; whichever insert wins the race
/// supplies the stored metadata, the row is never updated afterwards.
pub async fn create_if_absent<C: Context>(
    ctx: &C,
    movie_id: i64,
    movie_name: &str,
    poster_path: Option<&str>,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (id, movie_name, poster_path) VALUES (?, ?, ?) ",
        "ON DUPLICATE KEY UPDATE id = id"
    );
    sqlx::query(QUERY)
        .bind(movie_id)
        .bind(movie_name)
        .bind(poster_path)
        .execute(ctx.db())
        .await?;
    Ok(())
}
