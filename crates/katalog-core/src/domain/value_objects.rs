//! Domain value objects: ProductId and ProductField.
//!
//! # Design
//!
//! These are pure value types with equality-by-value. They hold NO rule
//! logic: field rules live in `rules.rs`, composition in `validation.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProductId ────────────────────────────────────────────────────────────────

/// Identifier of a product record.
///
/// Assigned once when a form is opened, before any validation, and never
/// changed afterwards. The format is free; the generators in
/// `katalog-adapters` produce `product-<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Prefix used by the bundled generators.
    pub const PREFIX: &'static str = "product-";

    /// Create an id, rejecting values that cannot be round-tripped through a
    /// command line or a comma-separated list.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidProductId {
                id: value,
                reason: "id cannot be empty",
            });
        }
        if value.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(DomainError::InvalidProductId {
                id: value,
                reason: "id cannot contain whitespace or commas",
            });
        }
        Ok(Self(value))
    }

    /// Build an id from a generator suffix: `product-<suffix>`.
    pub fn with_suffix(suffix: impl fmt::Display) -> Result<Self, DomainError> {
        Self::new(format!("{}{}", Self::PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ProductField ─────────────────────────────────────────────────────────────

/// A field of the product form.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    ProductName,
    SellerInfo,
    StockQuantity,
    Price,
    DiscountedPrice,
    Category,
    ProductImages,
}

impl ProductField {
    /// Every field, in form order.
    pub const ALL: [ProductField; 7] = [
        Self::ProductName,
        Self::SellerInfo,
        Self::StockQuantity,
        Self::Price,
        Self::DiscountedPrice,
        Self::Category,
        Self::ProductImages,
    ];

    /// Wire / error-map key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::SellerInfo => "sellerInfo",
            Self::StockQuantity => "stockQuantity",
            Self::Price => "price",
            Self::DiscountedPrice => "discountedPrice",
            Self::Category => "category",
            Self::ProductImages => "productImages",
        }
    }

    /// Human-readable form label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ProductName => "Product name",
            Self::SellerInfo => "Seller info",
            Self::StockQuantity => "Stock quantity",
            Self::Price => "Price",
            Self::DiscountedPrice => "Discounted price",
            Self::Category => "Category",
            Self::ProductImages => "Product images",
        }
    }

    /// Only the discounted price may be left empty.
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::DiscountedPrice)
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "productname" | "name" => Ok(Self::ProductName),
            "sellerinfo" | "seller" => Ok(Self::SellerInfo),
            "stockquantity" | "stock" => Ok(Self::StockQuantity),
            "price" => Ok(Self::Price),
            "discountedprice" | "discounted" => Ok(Self::DiscountedPrice),
            "category" => Ok(Self::Category),
            "productimages" | "images" => Ok(Self::ProductImages),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}
