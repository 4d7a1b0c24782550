//! Katalog Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Katalog
//! product catalog, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           katalog-cli (CLI)             │
//! │   (add / list / show "views")           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SubmissionService, CatalogService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: ProductStore, IdGenerator) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     katalog-adapters (Infrastructure)   │
//! │ (JsonFileStore, InMemoryProductStore,   │
//! │  UuidIdGenerator, TimestampIdGenerator) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Validator, Pricing Deriver, Product) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use katalog_core::domain::{derive, validate, ProductDraft, ProductField};
//!
//! let draft = ProductDraft::new()
//!     .with(ProductField::ProductName, "Kettle")
//!     .with(ProductField::Price, "100,50");
//!
//! // Every failing field at once; empty means valid.
//! for (field, message) in validate(&draft).iter() {
//!     println!("{field}: {message}");
//! }
//!
//! let pricing = derive("200", Some("150"));
//! assert_eq!(pricing.badge(), Some(25));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, ProductCard, ProductDetail, Submission, SubmissionService,
        ports::{IdGenerator, ProductStore},
    };
    pub use crate::domain::{
        DerivedPricing, Product, ProductDraft, ProductField, ProductForm, ProductId,
        ValidationErrors, derive, first_image, validate,
    };
    pub use crate::error::{KatalogError, KatalogResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
