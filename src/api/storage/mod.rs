//! Storage module for the API.
//!
//! Provides the generic repository trait with in-memory and PostgreSQL backends.

pub mod error;
pub mod fake_data;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod postgres;

pub use error::StorageError;
pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;
pub use traits::{Entity, Repository, seed_if_empty};
