use crate::adapters::tmdb;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::catalog::{CatalogPage, SearchArgs};
use crate::models::movies::{LikeMovieArgs, LikeMovieResponse, Movie};
use crate::repositories::{likes, movies, users};

const MIN_PAGE: u32 = 1;
const MAX_PAGE: u32 = 500;

/// Catalog browsing never persists anything; results only enter local
/// storage when a user explicitly likes an entry.
pub async fn search(args: SearchArgs) -> CatalogPage {
    let page = args.page.unwrap_or(MIN_PAGE).clamp(MIN_PAGE, MAX_PAGE);
    tmdb::search(args.name.as_deref(), args.year, page).await
}

/// Imports the movie from the caller's catalog snapshot if it is unseen,
/// then records the like. Both steps are single-statement upserts, so two
/// concurrent likes of the same unseen movie cannot produce duplicate rows.
pub async fn like_movie<C: Context>(
    ctx: &C,
    args: LikeMovieArgs,
    current_user_id: i64,
) -> ServiceResult<LikeMovieResponse> {
    movies::create_if_absent(ctx, args.id, &args.movie_name, args.poster_path.as_deref()).await?;
    match likes::create(ctx, current_user_id, args.id).await? {
        true => Ok(LikeMovieResponse::added()),
        false => Ok(LikeMovieResponse::already_liked()),
    }
}

pub async fn get_user_liked_movies<C: Context>(
    ctx: &C,
    user_id: i64,
) -> ServiceResult<Vec<Movie>> {
    match users::fetch_one(ctx, user_id).await {
        Ok(_) => {}
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound),
        Err(e) => return unexpected(e),
    }
    match likes::fetch_user_movies(ctx, user_id).await {
        Ok(liked) => Ok(liked.into_iter().map(Movie::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// The intersection of both users' liked sets. Deliberately requires no
/// friendship between the two users.
pub async fn get_common_movies<C: Context>(
    ctx: &C,
    current_user_id: i64,
    friend_id: i64,
) -> ServiceResult<Vec<Movie>> {
    match users::fetch_one(ctx, friend_id).await {
        Ok(_) => {}
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound),
        Err(e) => return unexpected(e),
    }
    match likes::fetch_common_movies(ctx, current_user_id, friend_id).await {
        Ok(common) => Ok(common.into_iter().map(Movie::from).collect()),
        Err(e) => unexpected(e),
    }
}
