//! Infrastructure adapters for Katalog.
//!
//! This crate implements the ports defined in `katalog-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod ids;
pub mod store;

// Re-export commonly used adapters
pub use ids::{TimestampIdGenerator, UuidIdGenerator};
pub use store::{InMemoryProductStore, JsonFileStore};
