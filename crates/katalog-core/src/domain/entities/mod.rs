pub mod pricing;
pub mod product;

pub use pricing::DerivedPricing;
pub use product::{Product, ProductDraft, ProductForm};
