// API module for the Rust backend
pub mod api;

// Re-export api modules at crate root (so routes can use crate::storage, crate::models)
pub use api::config;
pub use api::middleware;
pub use api::models;
pub use api::openapi;
pub use api::routes;
pub use api::storage;
