use crate::entities::movies::Movie as MovieEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Movie {
    pub id: i64,
    pub movie_name: String,
    pub poster_path: Option<String>,
}

impl From<MovieEntity> for Movie {
    fn from(value: MovieEntity) -> Self {
        Self {
            id: value.id,
            movie_name: value.movie_name,
            poster_path: value.poster_path,
        }
    }
}

/// The caller's snapshot of the catalog entry being liked. The movie row is
/// created from this snapshot if it has not been imported yet.
#[derive(Debug, Deserialize)]
pub struct LikeMovieArgs {
    pub id: i64,
    pub movie_name: String,
    pub poster_path: Option<String>,
}

#[derive(Serialize)]
pub struct LikeMovieResponse {
    pub message: &'static str,
}

impl LikeMovieResponse {
    pub const fn added() -> Self {
        Self {
            message: "Movie added to favorites",
        }
    }

    pub const fn already_liked() -> Self {
        Self {
            message: "Movie already in favorites",
        }
    }
}
