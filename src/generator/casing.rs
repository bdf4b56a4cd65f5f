//! Casing helpers for name tokens.
//!
//! This module provides functions for:
//! - Title-casing a token (first character upper, the rest lower)
//! - Building the three casing variants of a token
//! - Extracting the lowercase and uppercase initial of a token

/// Uppercases the first character and lowercases the rest.
///
/// # Examples
/// ```
/// use namebuster::generator::title_case;
///
/// assert_eq!(title_case("jOHN"), "John");
/// assert_eq!(title_case("d"), "D");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Casing variants of a token in `[lower, title, upper]` order.
///
/// This is the order used for both halves of a multi-token name.
pub fn variants(token: &str) -> [String; 3] {
    let lower = token.to_lowercase();
    let title = title_case(&lower);
    [lower, title, token.to_uppercase()]
}

/// Initial of a token as `[lower, upper]`.
///
/// Empty for an empty token.
pub fn initials(token: &str) -> Vec<String> {
    token
        .chars()
        .next()
        .map(|c| vec![c.to_lowercase().to_string(), c.to_uppercase().to_string()])
        .unwrap_or_default()
}
