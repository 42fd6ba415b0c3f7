use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, is_unique_violation, unexpected};
use crate::models::users::{RegisterArgs, User};
use crate::repositories::{sessions, users};

const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;

pub async fn register<C: Context>(ctx: &C, args: RegisterArgs) -> ServiceResult<User> {
    let username = args.username.trim();
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AppError::UsersInvalidUsername);
    }
    if args.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::UsersInvalidPassword);
    }

    let password_hash = bcrypt::hash(&args.password, bcrypt::DEFAULT_COST)?;
    let user_id = match users::create(ctx, username, &password_hash).await {
        Ok(user_id) => user_id,
        Err(e) if is_unique_violation(&e) => return Err(AppError::UsersUsernameTaken),
        Err(e) => return unexpected(e),
    };
    fetch_one(ctx, user_id).await
}

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<User> {
    match users::fetch_one(ctx, user_id).await {
        Ok(user) => Ok(User::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

/// Only the account owner may delete their account. Likes and friendship
/// edges are cascade-removed by the schema; sessions are destroyed here.
pub async fn delete<C: Context>(
    ctx: &C,
    user_id: i64,
    current_user_id: i64,
) -> ServiceResult<()> {
    if user_id != current_user_id {
        return Err(AppError::Unauthorized);
    }
    match users::delete(ctx, user_id).await {
        Ok(0) => return Err(AppError::UsersNotFound),
        Ok(_) => {}
        Err(e) => return unexpected(e),
    }
    sessions::delete_by_user_id(ctx, user_id).await?;
    Ok(())
}
