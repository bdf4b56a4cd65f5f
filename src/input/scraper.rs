//! Extraction of "First Last" names from page text.

use regex::Regex;
use std::sync::LazyLock;

/// Two capitalized ASCII words separated by exactly one whitespace character.
static FULL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+[ \t\n\r\x0C][A-Z][a-z]+").expect("full name pattern is valid")
});

/// Finds all non-overlapping "First Last" matches in text order.
///
/// Page markup is not stripped, so matches can come from anywhere in the
/// raw body.
///
/// # Examples
/// ```
/// use namebuster::input::find_names_in_text;
///
/// let names = find_names_in_text("<li>John Doe</li><li>Jane Smith, CEO</li>");
/// assert_eq!(names, vec!["John Doe", "Jane Smith"]);
/// ```
pub fn find_names_in_text(text: &str) -> Vec<String> {
    FULL_NAME_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
