//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! submission, listing, and detail use cases.

pub mod catalog_service;
pub mod submission_service;

pub use catalog_service::{CatalogService, ProductCard, ProductDetail};
pub use submission_service::{Submission, SubmissionService};
