use std::path::{Path, PathBuf};

/// Where the names for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A web page to scrape for "First Last" names
    Url(String),
    /// An existing file with one name per line
    File(PathBuf),
    /// The input itself is the name
    Literal(String),
}

/// Returns true if the input looks like an http(s) URL.
pub fn is_valid_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Decides how a raw command line input should be interpreted.
///
/// URLs win over paths, so a local file literally named `http://x` is
/// still fetched. Anything that is neither is treated as a name.
///
/// # Examples
/// ```
/// use namebuster::input::{InputSource, classify};
///
/// assert_eq!(
///     classify("https://example.com/team"),
///     InputSource::Url("https://example.com/team".to_string())
/// );
/// assert_eq!(
///     classify("John Doe"),
///     InputSource::Literal("John Doe".to_string())
/// );
/// ```
pub fn classify(input: &str) -> InputSource {
    if is_valid_url(input) {
        InputSource::Url(input.to_string())
    } else if Path::new(input).exists() {
        InputSource::File(PathBuf::from(input))
    } else {
        InputSource::Literal(input.to_string())
    }
}
