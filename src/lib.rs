//! CRUD service for NBA teams and players over SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod seed;
pub mod shutdown;

pub use config::Config;
pub use db::Store;
pub use routes::router;
