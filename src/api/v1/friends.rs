use crate::api::{CurrentUser, RequestContext};
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::models::users::User;
use crate::usecases::friendships;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

pub async fn send_request(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Path(target_id): Path<i64>,
) -> ServiceResult<StatusCode> {
    friendships::send_request(&ctx, session.user_id, target_id).await?;
    Ok(StatusCode::CREATED)
}

pub async fn accept_request(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Path(sender_id): Path<i64>,
) -> ServiceResult<StatusCode> {
    friendships::accept_request(&ctx, session.user_id, sender_id).await?;
    Ok(StatusCode::OK)
}

pub async fn list_friends(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
) -> ServiceResponse<Vec<User>> {
    let friends = friendships::get_friends(&ctx, session.user_id).await?;
    Ok(Json(friends))
}

pub async fn list_incoming(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
) -> ServiceResponse<Vec<User>> {
    let senders = friendships::get_incoming(&ctx, session.user_id).await?;
    Ok(Json(senders))
}

pub async fn remove_friendship(
    ctx: RequestContext,
    CurrentUser(session): CurrentUser,
    Path(user_id): Path<i64>,
) -> ServiceResult<StatusCode> {
    friendships::remove_friendship(&ctx, session.user_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
