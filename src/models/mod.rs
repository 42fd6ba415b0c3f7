pub mod catalog;
pub mod friendships;
pub mod movies;
pub mod sessions;
pub mod users;
