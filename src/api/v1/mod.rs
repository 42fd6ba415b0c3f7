pub mod friends;
pub mod movies;
pub mod users;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/registration", post(users::register))
        .route("/users/login", post(users::login))
        .route("/users/logout", post(users::logout))
        .route("/users/me", get(users::me))
        .route(
            "/users/{user_id}",
            get(users::get_user).delete(users::delete_user),
        )
        .route("/friends", get(friends::list_friends))
        .route("/friends/requests/incoming", get(friends::list_incoming))
        .route("/friends/request/{target_id}", post(friends::send_request))
        .route("/friends/accept/{sender_id}", post(friends::accept_request))
        .route("/friends/{user_id}", delete(friends::remove_friendship))
        .route("/movies", get(movies::search))
        .route("/movies/like", post(movies::like))
        .route("/movies/{user_id}/liked", get(movies::liked))
        .route("/movies/common/{friend_id}", get(movies::common))
}
