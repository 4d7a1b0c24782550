// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Katalog.
//!
//! This module contains the product rules and the pricing arithmetic with no
//! I/O. Persistence and identifier generation are reached through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Pure functions**: `validate` and `derive` return the same output for
//!   the same input
//!
// Public API - what the world sees
pub mod common;
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use common::{first_image, image_urls, normalize_decimal, parse_amount};
pub use entities::{
    pricing::{DerivedPricing, derive},
    product::{Product, ProductDraft, ProductForm},
};

pub use error::DomainError;

pub use value_objects::{ProductField, ProductId};

pub use validation::{DomainValidator, ValidationErrors, validate};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ErrorCategory;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn product_field_parses_wire_and_short_names() {
        assert_eq!(
            ProductField::from_str("productName").unwrap(),
            ProductField::ProductName
        );
        assert_eq!(
            ProductField::from_str("discounted_price").unwrap(),
            ProductField::DiscountedPrice
        );
        assert_eq!(
            ProductField::from_str("images").unwrap(),
            ProductField::ProductImages
        );
        assert!(ProductField::from_str("colour").is_err());
    }

    #[test]
    fn product_field_display_matches_wire_key() {
        for field in ProductField::ALL {
            assert_eq!(field.to_string(), field.as_str());
            assert_eq!(ProductField::from_str(field.as_str()).unwrap(), field);
        }
    }

    #[test]
    fn product_id_rejects_unusable_values() {
        assert!(ProductId::new("product-42").is_ok());
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("product 42").is_err());
        assert!(ProductId::new("a,b").is_err());
    }

    #[test]
    fn product_id_with_suffix_uses_prefix() {
        let id = ProductId::with_suffix(1718000000000u64).unwrap();
        assert_eq!(id.as_str(), "product-1718000000000");
    }

    #[test]
    fn unknown_field_error_is_validation_category() {
        let err = ProductField::from_str("nope").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    // ========================================================================
    // Submission flow (validate → normalize → derive)
    // ========================================================================

    #[test]
    fn accepted_product_prices_like_its_raw_input() {
        let draft = ProductDraft::new()
            .with(ProductField::ProductName, "Chair")
            .with(ProductField::SellerInfo, "Ahşap Atölyesi")
            .with(ProductField::StockQuantity, "3")
            .with(ProductField::Price, "200")
            .with(ProductField::DiscountedPrice, "150")
            .with(ProductField::Category, "Furniture")
            .with(ProductField::ProductImages, "https://img.example/chair.jpg");

        assert!(validate(&draft).is_empty());

        let product = Product::accept(ProductId::new("product-7").unwrap(), draft).unwrap();
        let pricing = product.pricing();

        assert_eq!(pricing, derive("200", Some("150")));
        assert_eq!(pricing.badge(), Some(25));
        assert_eq!(product.first_image(), "https://img.example/chair.jpg");
    }
}
