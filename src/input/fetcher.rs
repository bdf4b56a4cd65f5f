//! HTTP page fetching for the URL input path

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;

/// Creates an HTTP client with the given request timeout and user agent.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client(timeout_seconds: u64, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
}

/// Fetches the raw body of a page.
///
/// Non-success statuses are logged but the body is still returned, since
/// error pages can list names too.
///
/// # Errors
/// * `AppError::NetworkTimeout` - The request exceeded the client timeout
/// * `AppError::NetworkConnection` - The host could not be reached
/// * `AppError::Fetch` - Any other request or body read failure
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::Fetch(e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP {} from {}, scraping body anyway", status.as_u16(), url);
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::Fetch(e)
        }
    })?;

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches a page, degrading to an empty body on any failure.
pub async fn fetch_site_content(client: &Client, url: &str) -> String {
    match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not fetch URL: {e}");
            String::new()
        }
    }
}
