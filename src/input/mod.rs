//! Name acquisition from the command line input.
//!
//! The raw input is classified as a URL, an existing file or a literal name,
//! then turned into a plain list of names for the generator. Every failure on
//! this path is logged and degrades to an empty list.

pub mod fetcher;
pub mod file_reader;
pub mod scraper;
pub mod source;

use crate::config::Config;
use tracing::{info, warn};

pub use fetcher::{create_http_client, fetch_page, fetch_site_content};
pub use file_reader::read_lines;
pub use scraper::find_names_in_text;
pub use source::{InputSource, classify, is_valid_url};

/// Resolves the raw input into the names to generate candidates for.
///
/// # Arguments
/// * `input` - The joined command line input
/// * `config` - Supplies the HTTP timeout and user agent for URL inputs
pub async fn collect_names(input: &str, config: &Config) -> Vec<String> {
    let names = match classify(input) {
        InputSource::Url(url) => {
            // For URLs the body is scraped, since HTML is messy
            let content = match create_http_client(config.http_timeout_seconds, &config.user_agent)
            {
                Ok(client) => fetch_site_content(&client, &url).await,
                Err(e) => {
                    warn!("Could not create HTTP client: {e}");
                    String::new()
                }
            };
            let names = find_names_in_text(&content);
            info!("Scraped {} names from {url}", names.len());
            names
        }
        InputSource::File(path) => match read_lines(&path).await {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Error reading file {}: {e}", path.display());
                Vec::new()
            }
        },
        InputSource::Literal(name) => vec![name],
    };

    if names.is_empty() {
        warn!("No names found/extracted");
    }
    names
}
