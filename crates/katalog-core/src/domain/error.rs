// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Field-level validation failures are NOT errors: they are returned as
/// [`crate::domain::ValidationErrors`] data. This enum covers the cases where
/// a domain value itself cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid product id '{id}': {reason}")]
    InvalidProductId { id: String, reason: &'static str },

    #[error("Unknown product field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProductId { id, reason } => vec![
                format!("'{}' is not a usable product id: {}", id, reason),
                "Product ids look like: product-1718000000000".into(),
                "Try: katalog list --format list".into(),
            ],
            Self::UnknownField(name) => vec![
                format!("'{}' is not a product field", name),
                "Known fields: productName, sellerInfo, stockQuantity, price, \
                 discountedPrice, category, productImages"
                    .into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProductId { .. } | Self::UnknownField(_) => ErrorCategory::Validation,
        }
    }
}
