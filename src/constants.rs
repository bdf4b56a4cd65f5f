//! Application-wide constants and fixed messages
//!
//! Keeps the usage text, user-facing messages and HTTP defaults in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Upper bound accepted for a configured HTTP timeout
pub const MAX_HTTP_TIMEOUT_SECONDS: u64 = 300;

/// User agent sent when fetching pages
pub const DEFAULT_USER_AGENT: &str = concat!("namebuster/", env!("CARGO_PKG_VERSION"));

/// Default log file name used when only a directory is known
pub const DEFAULT_LOG_FILE_NAME: &str = "namebuster.log";

/// Printed to stdout when the program is started without input
pub const USAGE: &str = r#"
  Usage: namebuster <text|url|file>

  Example (names): namebuster "John Doe" > usernames.txt
  Example (single): namebuster "admin" > usernames.txt
  Example (url):    namebuster https://example.com > usernames.txt
  Example (file):   namebuster employees.txt > usernames.txt
"#;

/// Exit code when the program is started without input
pub const USAGE_EXIT_CODE: i32 = 1;

/// Printed when generation produced nothing
pub const NO_USERNAMES_MESSAGE: &str = "No usernames generated.";

/// Username generation constants
pub mod generator {
    /// Suffixes appended to each left-hand element before combining, in output order
    pub const SEPARATORS: [char; 3] = ['.', '_', '-'];
}

/// Environment variables that override config file values
pub mod env {
    pub const LOG_FILE: &str = "NAMEBUSTER_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NAMEBUSTER_HTTP_TIMEOUT";
    pub const USER_AGENT: &str = "NAMEBUSTER_USER_AGENT";
}
