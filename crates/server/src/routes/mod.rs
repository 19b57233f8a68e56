pub mod advisor;
pub mod auth;
pub mod health;
pub mod rating;
pub mod root;
pub mod student;
