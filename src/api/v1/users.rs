use crate::api::{CurrentUser, RequestContext};
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::models::sessions::{LoginArgs, LoginResponse};
use crate::models::users::{RegisterArgs, User};
use crate::usecases::{sessions, users};
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

pub async fn register(
    ctx: RequestContext,
    Json(args): Json<RegisterArgs>,
) -> ServiceResult<(StatusCode, Json<User>)> {
    let user = users::register(&ctx, args).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    ctx: RequestContext,
    Json(args): Json<LoginArgs>,
) -> ServiceResponse<LoginResponse> {
    let session = sessions::create(&ctx, args).await?;
    Ok(Json(LoginResponse::bearer(session.session_id)))
}

pub async fn logout(ctx: RequestContext, CurrentUser(session): CurrentUser) -> ServiceResult<StatusCode> {
    sessions::delete(&ctx, &session).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(CurrentUser(session): CurrentUser) -> Json<User> {
    Json(User {
        user_id: session.user_id,
        username: session.username,
    })
}

pub async fn get_user(ctx: RequestContext, Path(user_id): Path<i64>) -> ServiceResponse<User> {
    let user = users::fetch_one(&ctx, user_id).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Path(user_id): Path<i64>,
) -> ServiceResult<StatusCode> {
    users::delete(&ctx, user_id, session.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
