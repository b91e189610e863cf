//! Protocol probing.
//!
//! For each hostname two HEAD requests are issued over the shared client:
//! - `http://<hostname>`, expected to answer 301 with `Location: https://<hostname>/`
//! - `https://<hostname>`, expected to carry a `Strict-Transport-Security` header
//!
//! Network failures are recovered here and become `ConnectionError` outcomes.
//! Target validation failures are returned as `ProbeError` and end the run.

mod classify;
mod target;
mod types;

use std::sync::Arc;

use log::{debug, warn};

use crate::config::ErrorMode;
use crate::error_handling::{update_error_stats, ProbeError, ProbeStats};

pub use classify::{classify_hsts, classify_redirect, strip_max_age};
pub use target::{expected_location, ProbeTarget, Scheme};
pub use types::{HstsOutcome, RedirectOutcome, SiteReport};

/// Issues the redirect and HSTS probes over one shared HTTP client.
///
/// The client must have redirect following disabled (see
/// `initialization::init_client`); the prober relies on seeing the raw 3xx
/// response.
#[derive(Clone)]
pub struct Prober {
    client: reqwest::Client,
    hsts_scheme: Scheme,
    stats: Arc<ProbeStats>,
}

impl Prober {
    /// Creates a prober around an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            hsts_scheme: Scheme::Https,
            stats: Arc::new(ProbeStats::new()),
        }
    }

    /// Issues the HSTS probe over `scheme` instead of HTTPS.
    ///
    /// Lets the HSTS probe reach plaintext endpoints such as local test
    /// servers. The expected redirect `Location` stays `https://<hostname>/`.
    pub fn with_hsts_scheme(mut self, scheme: Scheme) -> Self {
        self.hsts_scheme = scheme;
        self
    }

    /// Network failure counters accumulated by this prober and its clones.
    pub fn stats(&self) -> &Arc<ProbeStats> {
        &self.stats
    }

    /// Probes `http://<hostname>` for a permanent redirect to the HTTPS origin.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidUrl` if the target URL cannot be built.
    /// Network failures are not errors; they yield `RedirectOutcome::ConnectionError`.
    pub async fn probe_redirect(&self, hostname: &str) -> Result<RedirectOutcome, ProbeError> {
        let target = ProbeTarget::new(Scheme::Http, hostname)?;

        let outcome = match self.head(&target).await {
            Some(response) => classify_redirect(hostname, response.status(), response.headers()),
            None => RedirectOutcome::ConnectionError,
        };
        debug!("Redirect probe for {}: {:?}", hostname, outcome);
        Ok(outcome)
    }

    /// Probes `https://<hostname>` for a `Strict-Transport-Security` header.
    ///
    /// Always issued over HTTPS (unless overridden with `with_hsts_scheme`),
    /// regardless of the redirect outcome.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidUrl` if the target URL cannot be built.
    pub async fn probe_hsts(&self, hostname: &str) -> Result<HstsOutcome, ProbeError> {
        let target = ProbeTarget::new(self.hsts_scheme, hostname)?;

        let outcome = match self.head(&target).await {
            Some(response) => classify_hsts(response.headers()),
            None => HstsOutcome::ConnectionError,
        };
        debug!("HSTS probe for {}: {:?}", hostname, outcome);
        Ok(outcome)
    }

    /// Probes one site and builds its report row.
    ///
    /// The redirect probe always completes before the HSTS probe starts. With
    /// `ErrorMode::Coalesced` a network failure in either probe produces
    /// `SiteReport::connection_error`, and the HSTS probe is not issued once
    /// the redirect probe has failed.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidUrl` if a target URL cannot be built.
    pub async fn probe_site(&self, hostname: &str, mode: ErrorMode) -> Result<SiteReport, ProbeError> {
        let redirect = self.probe_redirect(hostname).await?;
        if mode == ErrorMode::Coalesced && redirect.is_connection_error() {
            return Ok(SiteReport::connection_error(hostname));
        }

        let hsts = self.probe_hsts(hostname).await?;
        if mode == ErrorMode::Coalesced && hsts.is_connection_error() {
            return Ok(SiteReport::connection_error(hostname));
        }

        Ok(SiteReport::new(hostname, redirect, hsts))
    }

    // None on any network-level failure; the failure is logged and counted.
    async fn head(&self, target: &ProbeTarget) -> Option<reqwest::Response> {
        match self.client.head(target.url().clone()).send().await {
            Ok(response) => Some(response),
            Err(e) => {
                let kind = update_error_stats(&self.stats, &e);
                warn!("{} for {}: {}", kind, target.url(), e);
                None
            }
        }
    }
}
