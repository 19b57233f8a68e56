pub mod advisor;
pub mod profile;
pub mod rating;
