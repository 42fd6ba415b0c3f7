pub mod friendships;
pub mod likes;
pub mod movies;
pub mod sessions;
pub mod users;
