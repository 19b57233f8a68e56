pub mod db;
pub mod entities;
pub mod services;
pub mod store;

pub use store::SeaOrmStore;
