//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `katalog-adapters` crate provides implementations.

use crate::domain::{Product, ProductId};
use crate::error::KatalogResult;

/// Port for product persistence.
///
/// Implemented by:
/// - `katalog_adapters::store::InMemoryProductStore` (tests, `store.backend = "memory"`)
/// - `katalog_adapters::store::JsonFileStore` (production)
///
/// ## Contract
///
/// - Writes are append-only; there is no update or delete
/// - A successful `append` is visible to the next `load`
/// - No locking or transactional guarantee beyond that
#[cfg_attr(test, mockall::automock)]
pub trait ProductStore: Send + Sync {
    /// Every stored record, in insertion order.
    ///
    /// Never fails: an empty or unreadable store yields an empty list, and
    /// malformed stored data is discarded by the adapter.
    fn load(&self) -> Vec<Product>;

    /// Append one record. Rejects a record whose id is already stored.
    fn append(&self, record: Product) -> KatalogResult<()>;
}

/// Port for product identifier generation.
///
/// Implemented by:
/// - `katalog_adapters::ids::UuidIdGenerator`
/// - `katalog_adapters::ids::TimestampIdGenerator`
///
/// Generators only need to be unlikely to collide; the submission service
/// checks each id against the store and asks again on a clash.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ProductId;
}
