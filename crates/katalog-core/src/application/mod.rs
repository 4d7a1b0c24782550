//! Application layer for Katalog.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SubmissionService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All product rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    ProductCard,   // DTO for the listing view
    ProductDetail, // DTO for the detail view
    Submission,
    SubmissionService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{IdGenerator, ProductStore};

pub use error::ApplicationError;
