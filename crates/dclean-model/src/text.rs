//! Text normalization primitive.

/// Lowercase, trim, and collapse internal whitespace runs to a single space.
///
/// # Examples
///
/// ```
/// use dclean_model::normalize_str;
///
/// assert_eq!(normalize_str("  Paid  "), "paid");
/// assert_eq!(normalize_str("Partially\t  REFUNDED"), "partially refunded");
/// assert_eq!(normalize_str("   "), "");
/// ```
pub fn normalize_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word.to_lowercase());
    }
    out
}
