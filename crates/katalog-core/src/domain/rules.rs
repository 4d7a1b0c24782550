//! Field rules for the product form.
//!
//! One pure predicate per rule, each paired with a fixed message in
//! [`FIELD_RULES`]. The validator walks the table; nothing here knows about
//! other fields except [`discount_below_price`].

use std::fmt;

use crate::domain::{common::parse_amount, value_objects::ProductField};

/// Letters accepted in seller names in addition to ASCII alphanumerics.
pub const TURKISH_LETTERS: &str = "çÇğĞıİöÖşŞüÜ";

/// Scheme every product image URL must start with.
pub const SECURE_SCHEME: &str = "https:";

/// Message reported when the discounted price is not below the price.
pub const DISCOUNT_NOT_LOWER: &str = "Discounted price must be lower than the price.";

/// A single shape rule: a named predicate and the message shown when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

/// The rules attached to one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: ProductField,
    /// `Some` when an empty value is an error.
    pub required: Option<&'static str>,
    pub shape: Rule,
}

/// Per-field rule table, in form order.
pub const FIELD_RULES: [FieldRules; 7] = [
    FieldRules {
        field: ProductField::ProductName,
        required: Some("Product name is required."),
        shape: Rule {
            name: "starts_with_letter",
            check: starts_with_letter,
            message: "Product name must start with a letter.",
        },
    },
    FieldRules {
        field: ProductField::SellerInfo,
        required: Some("Seller info is required."),
        shape: Rule {
            name: "is_seller_name",
            check: is_seller_name,
            message: "Seller info must start with a letter or digit and may only contain \
                      letters, digits, spaces, '-' or '.'.",
        },
    },
    FieldRules {
        field: ProductField::StockQuantity,
        required: Some("Stock quantity is required."),
        shape: Rule {
            name: "is_digits",
            check: is_digits,
            message: "Stock quantity may only contain digits.",
        },
    },
    FieldRules {
        field: ProductField::Price,
        required: Some("Price is required."),
        shape: Rule {
            name: "is_decimal_amount",
            check: is_decimal_amount,
            message: "Price must be a number or a decimal number (e.g. 100.50).",
        },
    },
    FieldRules {
        field: ProductField::DiscountedPrice,
        required: None,
        shape: Rule {
            name: "is_decimal_amount",
            check: is_decimal_amount,
            message: "Discounted price must be a number or a decimal number.",
        },
    },
    FieldRules {
        field: ProductField::Category,
        required: Some("Category is required."),
        shape: Rule {
            name: "is_category_name",
            check: is_category_name,
            message: "Category may only contain letters and spaces and must start with a letter.",
        },
    },
    FieldRules {
        field: ProductField::ProductImages,
        required: Some("At least one product image is required."),
        shape: Rule {
            name: "has_secure_image_urls",
            check: has_secure_image_urls,
            message: "Every image URL must start with 'https://'.",
        },
    },
];

/// Look up the rules for a field.
pub fn rules_for(field: ProductField) -> &'static FieldRules {
    // FIELD_RULES is declared in `ProductField::ALL` order.
    &FIELD_RULES[field as usize]
}

// ── Predicates ───────────────────────────────────────────────────────────────

pub fn starts_with_letter(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_seller_lead(c: char) -> bool {
    c.is_ascii_alphanumeric() || TURKISH_LETTERS.contains(c)
}

pub fn is_seller_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if is_seller_lead(first) => {
            chars.all(|c| is_seller_lead(c) || matches!(c, ' ' | '-' | '.'))
        }
        _ => false,
    }
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Digits, then optionally one `.` or `,` followed by zero or more digits.
/// No sign, no exponent, no thousands separator.
pub fn is_decimal_amount(value: &str) -> bool {
    let (whole, fraction) = match value.split_once(['.', ',']) {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };
    is_digits(whole) && fraction.chars().all(|c| c.is_ascii_digit())
}

pub fn is_category_name(value: &str) -> bool {
    starts_with_letter(value) && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Blank tokens (`"a, ,b"`) are ignored rather than rejected.
pub fn has_secure_image_urls(value: &str) -> bool {
    value
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .all(|url| url.starts_with(SECURE_SCHEME))
}

/// Cross-field rule: a positive discounted price must be strictly below the
/// price. Unparsable or non-positive discounted prices pass.
pub fn discount_below_price(price: &str, discounted_price: &str) -> bool {
    let discounted = parse_amount(discounted_price).unwrap_or(0.0);
    if discounted <= 0.0 {
        return true;
    }
    match parse_amount(price) {
        Some(price) => discounted < price,
        None => true,
    }
}
