//! Display pricing derived from a product's stored amounts.

use serde::Serialize;

use crate::domain::common::parse_amount;

/// Pricing figures for rendering a product.
///
/// Computed on every read from `price` / `discountedPrice` and never stored,
/// so it cannot drift from the record it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPricing {
    pub original_price: f64,
    pub sale_price: f64,
    pub has_discount: bool,
    /// 0–100, only meaningful when `has_discount` is set.
    pub discount_percentage: u8,
}

impl DerivedPricing {
    /// Derive pricing from raw amount text.
    ///
    /// `price` is expected to have passed validation already; text that does
    /// not parse is read as 0. A discounted price that is absent, empty, not
    /// positive, or not strictly below the price yields no discount.
    pub fn derive(price: &str, discounted_price: Option<&str>) -> Self {
        let original_price = parse_amount(price).unwrap_or(0.0);
        let sale_price = discounted_price.and_then(parse_amount).unwrap_or(0.0);

        let has_discount = sale_price > 0.0 && original_price > sale_price;
        let discount_percentage = if has_discount {
            percentage_off(original_price, sale_price)
        } else {
            0
        };

        Self {
            original_price,
            sale_price,
            has_discount,
            discount_percentage,
        }
    }

    /// The price to show prominently.
    pub fn display_price(&self) -> f64 {
        if self.has_discount {
            self.sale_price
        } else {
            self.original_price
        }
    }

    /// The struck-through original price, when discounted.
    pub fn struck_price(&self) -> Option<f64> {
        self.has_discount.then_some(self.original_price)
    }

    /// Discount badge value; `None` unless strictly positive.
    pub fn badge(&self) -> Option<u8> {
        (self.discount_percentage > 0).then_some(self.discount_percentage)
    }
}

/// Round-half-up percentage of `original` saved by paying `sale`.
fn percentage_off(original: f64, sale: f64) -> u8 {
    if original.is_infinite() {
        return 100;
    }
    let ratio = (original - sale) / original * 100.0;
    // Inputs are positive with sale < original, so ratio is in (0, 100).
    (ratio + 0.5).floor().clamp(0.0, 100.0) as u8
}

/// Derive pricing. See [`DerivedPricing::derive`].
pub fn derive(price: &str, discounted_price: Option<&str>) -> DerivedPricing {
    DerivedPricing::derive(price, discounted_price)
}
