//! Username candidate generator
//!
//! This library turns person names into lists of likely usernames by combining
//! casing variants, initials and separators. Names can come from a literal
//! string, a file with one name per line, or a web page scraped for
//! "First Last" patterns.
//!
//! # Examples
//!
//! ```rust,no_run
//! use namebuster::config::Config;
//! use namebuster::generator::generate;
//! use namebuster::input::collect_names;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let names = collect_names("https://example.com/team", &config).await;
//!
//!     for candidate in generate(&names) {
//!         println!("{candidate}");
//!     }
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod input;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use generator::{generate, generate_for_name};
pub use input::{InputSource, collect_names};
