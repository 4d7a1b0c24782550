//! Product draft, form, and the persisted `Product` record.
//!
//! A `Product` can only be created through [`Product::accept`], which runs the
//! validator and normalizes decimal separators. Deserialization from a store
//! is the one other way in; validity is checked at write time and not
//! re-enforced on read.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    common::{self, normalize_decimal},
    entities::pricing::DerivedPricing,
    validation::{DomainValidator, ValidationErrors},
    value_objects::{ProductField, ProductId},
};

// ── Draft ────────────────────────────────────────────────────────────────────

/// Raw form input, one text value per field. An empty `discounted_price`
/// means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub product_name: String,
    pub seller_info: String,
    pub stock_quantity: String,
    pub price: String,
    pub discounted_price: String,
    pub category: String,
    pub product_images: String,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::ProductName => &self.product_name,
            ProductField::SellerInfo => &self.seller_info,
            ProductField::StockQuantity => &self.stock_quantity,
            ProductField::Price => &self.price,
            ProductField::DiscountedPrice => &self.discounted_price,
            ProductField::Category => &self.category,
            ProductField::ProductImages => &self.product_images,
        }
    }

    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let slot = match field {
            ProductField::ProductName => &mut self.product_name,
            ProductField::SellerInfo => &mut self.seller_info,
            ProductField::StockQuantity => &mut self.stock_quantity,
            ProductField::Price => &mut self.price,
            ProductField::DiscountedPrice => &mut self.discounted_price,
            ProductField::Category => &mut self.category,
            ProductField::ProductImages => &mut self.product_images,
        };
        *slot = value.into();
    }

    /// Chainable [`Self::set`].
    pub fn with(mut self, field: ProductField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The discounted price, if one was entered.
    pub fn discounted_price(&self) -> Option<&str> {
        Some(self.discounted_price.as_str()).filter(|v| !v.is_empty())
    }

    pub fn validate(&self) -> ValidationErrors {
        DomainValidator::validate(self)
    }
}

// ── Form ─────────────────────────────────────────────────────────────────────

/// A draft together with the id assigned when the form was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    product_id: ProductId,
    draft: ProductDraft,
}

impl ProductForm {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            draft: ProductDraft::default(),
        }
    }

    pub fn with_draft(product_id: ProductId, draft: ProductDraft) -> Self {
        Self { product_id, draft }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Update one field, as a form does on every keystroke.
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn validate(&self) -> ValidationErrors {
        self.draft.validate()
    }

    pub fn into_parts(self) -> (ProductId, ProductDraft) {
        (self.product_id, self.draft)
    }
}

// ── Product ──────────────────────────────────────────────────────────────────

/// A validated, persisted product record.
///
/// Serialized with camelCase keys. `discountedPrice` is omitted when absent;
/// an empty stored value reads back as absent. Older records without
/// `productImages` load with an empty image list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    product_id: ProductId,
    product_name: String,
    seller_info: String,
    stock_quantity: String,
    price: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    discounted_price: Option<String>,
    category: String,
    #[serde(default)]
    product_images: String,
}

impl Product {
    /// Validate `draft` and turn it into a record.
    ///
    /// On success both amounts are stored with `.` as the decimal separator
    /// and an empty discounted price becomes `None`. Every other field is
    /// kept byte-for-byte as entered.
    pub fn accept(product_id: ProductId, draft: ProductDraft) -> Result<Self, ValidationErrors> {
        let errors = DomainValidator::validate(&draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let discounted_price = draft.discounted_price().map(normalize_decimal);
        Ok(Self {
            product_id,
            price: normalize_decimal(&draft.price),
            discounted_price,
            product_name: draft.product_name,
            seller_info: draft.seller_info,
            stock_quantity: draft.stock_quantity,
            category: draft.category,
            product_images: draft.product_images,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }
    pub fn product_name(&self) -> &str {
        &self.product_name
    }
    pub fn seller_info(&self) -> &str {
        &self.seller_info
    }
    pub fn stock_quantity(&self) -> &str {
        &self.stock_quantity
    }
    pub fn price(&self) -> &str {
        &self.price
    }
    pub fn discounted_price(&self) -> Option<&str> {
        self.discounted_price.as_deref()
    }
    pub fn category(&self) -> &str {
        &self.category
    }
    pub fn product_images(&self) -> &str {
        &self.product_images
    }

    /// Pricing computed from the stored amounts. Never cached.
    pub fn pricing(&self) -> DerivedPricing {
        DerivedPricing::derive(&self.price, self.discounted_price())
    }

    /// First image URL, or `""` when the record has none.
    pub fn first_image(&self) -> &str {
        common::first_image(Some(&self.product_images))
    }

    pub fn image_urls(&self) -> Vec<&str> {
        common::image_urls(&self.product_images)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
