//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by every probe.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following disabled, so the raw 3xx response and its `Location`
///   header are observed instead of the final destination
/// - Request timeout from the configuration
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT`)
/// - User-Agent header from the configuration
///
/// The redirect policy is set on the client, so no individual request can
/// follow redirects.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
