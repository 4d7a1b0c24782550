//! Submission Service - the product form workflow.
//!
//! 1. Open a form: assign an unused product id before anything is typed
//! 2. Validate the draft (all field errors at once)
//! 3. Normalize and append the accepted record to the store
//!
//! A rejected draft is returned as data. A store failure is returned as an
//! error so the caller decides how to surface it; nothing is retried.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{IdGenerator, ProductStore},
    },
    domain::{Product, ProductForm, ProductId, ValidationErrors},
    error::KatalogResult,
};

/// How many fresh ids to draw before giving up on a colliding generator.
const MAX_ID_ATTEMPTS: usize = 8;

/// Outcome of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The record was validated, normalized, and stored.
    Accepted(Product),
    /// Nothing was stored; every failing field is listed.
    Rejected(ValidationErrors),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Service behind the submission view.
pub struct SubmissionService {
    store: Box<dyn ProductStore>,
    ids: Box<dyn IdGenerator>,
}

impl SubmissionService {
    /// Create a new submission service with the given adapters.
    pub fn new(store: Box<dyn ProductStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Open an empty form with a product id no stored record uses.
    #[instrument(skip_all)]
    pub fn open_form(&self) -> KatalogResult<ProductForm> {
        let taken: HashSet<ProductId> = self
            .store
            .load()
            .into_iter()
            .map(|p| p.product_id().clone())
            .collect();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !taken.contains(&id) {
                debug!(product_id = %id, attempt, "Product id assigned");
                return Ok(ProductForm::new(id));
            }
            warn!(product_id = %id, attempt, "Generated product id is already stored");
        }

        Err(ApplicationError::IdGenerationExhausted {
            attempts: MAX_ID_ATTEMPTS,
        }
        .into())
    }

    /// Validate and, when valid, persist the form's record.
    #[instrument(skip_all, fields(product_id = %form.product_id()))]
    pub fn submit(&self, form: ProductForm) -> KatalogResult<Submission> {
        let (id, draft) = form.into_parts();

        let product = match Product::accept(id, draft) {
            Ok(product) => product,
            Err(errors) => {
                warn!(
                    fields = %errors.fields().map(|f| f.as_str()).collect::<Vec<_>>().join(","),
                    "Draft rejected, nothing saved"
                );
                return Ok(Submission::Rejected(errors));
            }
        };

        self.store.append(product.clone()).inspect_err(|e| {
            warn!(error = %e, "Store rejected the product");
        })?;

        info!(name = %product.product_name(), "Product saved");
        Ok(Submission::Accepted(product))
    }
}
