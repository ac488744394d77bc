//! Redaction of secret values before they reach a log line.

/// Number of leading characters kept visible.
const VISIBLE_PREFIX: usize = 4;

const MASK: &str = "****";

/// Redact a secret value for display.
///
/// Keeps the first four characters and masks the rest. Values of four
/// characters or fewer are masked entirely so short secrets never leak.
///
/// ```
/// use sluice::core::redact::redact;
///
/// assert_eq!(redact("postgres://db"), "post****");
/// assert_eq!(redact("abc"), "****");
/// ```
pub fn redact(value: &str) -> String {
    let mut chars = value.char_indices();
    match chars.nth(VISIBLE_PREFIX) {
        Some((end, _)) => format!("{}{}", &value[..end], MASK),
        None => MASK.to_string(),
    }
}
