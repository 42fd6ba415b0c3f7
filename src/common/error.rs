use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

/// Duplicate-key races on insert are caught at the service boundary and
/// reinterpreted as domain conflicts instead of storage faults.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    Unauthorized,

    UsersNotFound,
    UsersUsernameTaken,
    UsersInvalidUsername,
    UsersInvalidPassword,

    FriendshipsNotFound,
    FriendshipsSelfRequest,
    FriendshipsAlreadyFriends,
    FriendshipsAlreadyRequested,

    SessionsInvalidCredentials,
    SessionsNotFound,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersUsernameTaken => "users.username_taken",
            AppError::UsersInvalidUsername => "users.invalid_username",
            AppError::UsersInvalidPassword => "users.invalid_password",

            AppError::FriendshipsNotFound => "friendships.not_found",
            AppError::FriendshipsSelfRequest => "friendships.self_request",
            AppError::FriendshipsAlreadyFriends => "friendships.already_friends",
            AppError::FriendshipsAlreadyRequested => "friendships.already_requested",

            AppError::SessionsInvalidCredentials => "sessions.invalid_credentials",
            AppError::SessionsNotFound => "sessions.not_found",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersUsernameTaken => "This username is already taken.",
            AppError::UsersInvalidUsername => "Username must be between 1 and 50 characters.",
            AppError::UsersInvalidPassword => "Password must be at least 8 characters.",

            AppError::FriendshipsNotFound => "No friendship or friend request exists with this user.",
            AppError::FriendshipsSelfRequest => "You cannot send a friend request to yourself.",
            AppError::FriendshipsAlreadyFriends => "You are already friends with this user.",
            AppError::FriendshipsAlreadyRequested => {
                "A friend request between you and this user is already pending."
            }

            AppError::SessionsInvalidCredentials => {
                "You have entered an invalid username or password."
            }
            AppError::SessionsNotFound => "Your session is invalid or has expired.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::UsersInvalidUsername
            | AppError::UsersInvalidPassword
            | AppError::FriendshipsSelfRequest => StatusCode::BAD_REQUEST,

            AppError::Unauthorized
            | AppError::SessionsInvalidCredentials
            | AppError::SessionsNotFound => StatusCode::UNAUTHORIZED,

            AppError::UsersNotFound | AppError::FriendshipsNotFound => StatusCode::NOT_FOUND,

            AppError::UsersUsernameTaken
            | AppError::FriendshipsAlreadyFriends
            | AppError::FriendshipsAlreadyRequested => StatusCode::CONFLICT,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_map_to_409() {
        assert_eq!(
            AppError::FriendshipsAlreadyFriends.http_status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::FriendshipsAlreadyRequested.http_status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::UsersUsernameTaken.http_status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn self_request_is_a_bad_request() {
        assert_eq!(
            AppError::FriendshipsSelfRequest.http_status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn credential_errors_do_not_leak_which_field_was_wrong() {
        assert_eq!(
            AppError::SessionsInvalidCredentials.message(),
            "You have entered an invalid username or password."
        );
    }

    #[test]
    fn codes_are_namespaced() {
        assert_eq!(AppError::FriendshipsNotFound.code(), "friendships.not_found");
        assert_eq!(AppError::UsersNotFound.code(), "users.not_found");
    }
}
