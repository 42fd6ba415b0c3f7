use sqlx::FromRow;

/// A locally cached catalog movie. `id` is the external TMDB id; rows are
/// created lazily the first time any user likes the movie.
#[derive(Debug, FromRow)]
pub struct Movie {
    pub id: i64,
    pub movie_name: String,
    pub poster_path: Option<String>,
}
