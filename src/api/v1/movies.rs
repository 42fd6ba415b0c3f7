use crate::api::{CurrentUser, RequestContext};
use crate::common::error::ServiceResponse;
use crate::models::catalog::{CatalogPage, SearchArgs};
use crate::models::movies::{LikeMovieArgs, LikeMovieResponse, Movie};
use crate::usecases::movies;
use axum::Json;
use axum::extract::{Path, Query};

pub async fn search(Query(args): Query<SearchArgs>) -> Json<CatalogPage> {
    Json(movies::search(args).await)
}

pub async fn like(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Json(args): Json<LikeMovieArgs>,
) -> ServiceResponse<LikeMovieResponse> {
    let response = movies::like_movie(&ctx, args, session.user_id).await?;
    Ok(Json(response))
}

pub async fn liked(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResponse<Vec<Movie>> {
    let liked = movies::get_user_liked_movies(&ctx, user_id).await?;
    Ok(Json(liked))
}

pub async fn common(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Path(friend_id): Path<i64>,
) -> ServiceResponse<Vec<Movie>> {
    let common = movies::get_common_movies(&ctx, session.user_id, friend_id).await?;
    Ok(Json(common))
}
