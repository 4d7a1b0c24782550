//! Shared normalization helpers used by validation, pricing, and the views.
//!
//! Two concerns live here:
//! - decimal amounts, where both `,` and `.` are accepted as the fraction
//!   separator on input and `.` is the only one ever stored
//! - the comma-separated image list held in a single text field

/// The canonical fraction separator for stored amounts.
pub const DECIMAL_SEPARATOR: char = '.';

/// Replace the first `,` with `.`.
///
/// Validated amounts carry at most one separator, so a single replacement is
/// enough to reach the canonical form.
pub fn normalize_decimal(raw: &str) -> String {
    raw.replacen(',', ".", 1)
}

/// Parse an amount after normalizing its separator.
///
/// Only plain digits with an optional fraction are read; `inf`, `NaN`,
/// signs and exponents are `None`. Digit strings too long for `f64`
/// saturate to infinity so comparisons against them stay ordered.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = normalize_decimal(raw.trim());
    let plain = normalized.chars().any(|c| c.is_ascii_digit())
        && normalized
            .chars()
            .all(|c| c.is_ascii_digit() || c == DECIMAL_SEPARATOR);
    if !plain {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// First URL of a comma-separated image list, or `""` when there is none.
///
/// Absent input is treated as an empty list. Callers substitute their own
/// placeholder for the empty result.
pub fn first_image(images: Option<&str>) -> &str {
    images
        .unwrap_or_default()
        .split(',')
        .next()
        .map(str::trim)
        .unwrap_or_default()
}

/// Every non-empty trimmed token of a comma-separated image list.
pub fn image_urls(images: &str) -> Vec<&str> {
    images
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .collect()
}
