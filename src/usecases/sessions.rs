use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::sessions::CreateSessionArgs;
use crate::models::sessions::{LoginArgs, Session};
use crate::repositories::{sessions, users};
use crate::settings::AppSettings;
use uuid::Uuid;

/// Verifies the credentials and issues a new bearer session. Unknown
/// username and wrong password fail identically.
pub async fn create<C: Context>(ctx: &C, args: LoginArgs) -> ServiceResult<Session> {
    let user = match users::fetch_one_by_username(ctx, &args.username).await {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::SessionsInvalidCredentials),
        Err(e) => return unexpected(e),
    };

    if !bcrypt::verify(&args.password, &user.password_hash)? {
        return Err(AppError::SessionsInvalidCredentials);
    }

    let session = sessions::create(
        ctx,
        CreateSessionArgs {
            user_id: user.id,
            username: user.username,
        },
    )
    .await?;
    Ok(Session::from(session))
}

pub async fn fetch_one<C: Context>(ctx: &C, session_id: Uuid) -> ServiceResult<Session> {
    let session_ttl = AppSettings::get().session_ttl;
    match sessions::fetch_one(ctx, session_id).await {
        Ok(Some(session)) if session.is_expired(session_ttl) => {
            sessions::delete(ctx, session.session_id, session.user_id).await?;
            Err(AppError::SessionsNotFound)
        }
        Ok(Some(session)) => Ok(Session::from(session)),
        Ok(None) => Err(AppError::SessionsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn delete<C: Context>(ctx: &C, session: &Session) -> ServiceResult<()> {
    sessions::delete(ctx, session.session_id, session.user_id).await?;
    Ok(())
}
