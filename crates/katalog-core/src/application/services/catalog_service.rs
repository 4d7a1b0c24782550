//! Catalog Service - listing and detail lookups.
//!
//! Reads records from the store and derives pricing for each one on the
//! spot. Nothing computed here is written back.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::ProductStore,
    domain::{DerivedPricing, Product, ProductId},
};

/// Listing-view projection of a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product_id: ProductId,
    pub product_name: String,
    /// First image URL; `None` when the record has no image, so the view
    /// can fall back to a placeholder.
    pub image: Option<String>,
    pub pricing: DerivedPricing,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let image = product.first_image();
        Self {
            product_id: product.product_id().clone(),
            product_name: product.product_name().to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
            pricing: product.pricing(),
        }
    }
}

/// Detail-view projection of a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    pub images: Vec<String>,
    pub pricing: DerivedPricing,
}

impl From<Product> for ProductDetail {
    fn from(product: Product) -> Self {
        let images = product.image_urls().into_iter().map(String::from).collect();
        let pricing = product.pricing();
        Self {
            product,
            images,
            pricing,
        }
    }
}

/// Service behind the listing and detail views.
pub struct CatalogService {
    store: Box<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Every stored product as a card, in insertion order.
    #[instrument(skip_all)]
    pub fn list(&self) -> Vec<ProductCard> {
        let cards: Vec<ProductCard> = self.store.load().iter().map(ProductCard::from).collect();
        debug!(count = cards.len(), "Catalog listed");
        cards
    }

    /// Look up one product. A miss is `None`, not an error.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn find(&self, id: &ProductId) -> Option<ProductDetail> {
        let found = self
            .store
            .load()
            .into_iter()
            .find(|p| p.product_id() == id)
            .map(ProductDetail::from);

        if found.is_none() {
            debug!("Product not found");
        }
        found
    }
}
