use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::ProductDraft,
    rules::{self, FIELD_RULES},
    value_objects::ProductField,
};

/// Field → message mapping produced by the validator.
///
/// Empty means the draft is accepted. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ProductField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = ProductField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Record an error unless the field already has one.
    fn report(&mut self, field: ProductField, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_owned());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Centralized product validation.
///
/// Every field is checked on every call so a form can show all errors at
/// once. Within a field the first failing rule wins:
/// required, then shape, then the cross-field discount rule.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate(draft: &ProductDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for rules in &FIELD_RULES {
            let value = draft.get(rules.field);
            if value.is_empty() {
                if let Some(message) = rules.required {
                    errors.report(rules.field, message);
                }
                continue;
            }
            if !rules.shape.passes(value) {
                errors.report(rules.field, rules.shape.message);
            }
        }

        // Only meaningful once both amounts have a valid shape.
        let price_ok = !errors.contains(ProductField::Price);
        if let Some(discounted) = draft.discounted_price() {
            if price_ok
                && !errors.contains(ProductField::DiscountedPrice)
                && !rules::discount_below_price(&draft.price, discounted)
            {
                errors.report(ProductField::DiscountedPrice, rules::DISCOUNT_NOT_LOWER);
            }
        }

        errors
    }

    pub fn is_valid(draft: &ProductDraft) -> bool {
        Self::validate(draft).is_empty()
    }
}

/// Validate a draft. See [`DomainValidator::validate`].
pub fn validate(draft: &ProductDraft) -> ValidationErrors {
    DomainValidator::validate(draft)
}
