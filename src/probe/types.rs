//! Probe outcome types.

use reqwest::StatusCode;

/// Result of probing `http://<hostname>` for a permanent redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// 301 with `Location` exactly `https://<hostname>/`
    ValidRedirect,
    /// 301 pointing somewhere else; carries the `Location` value verbatim
    InvalidRedirectTarget(String),
    /// Any status other than 301
    InvalidStatus(StatusCode),
    /// DNS, TCP, TLS or timeout failure
    ConnectionError,
}

impl RedirectOutcome {
    /// `true` for a network failure.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, RedirectOutcome::ConnectionError)
    }

    /// `true` only for a valid permanent redirect to the HTTPS origin.
    pub fn is_valid(&self) -> bool {
        matches!(self, RedirectOutcome::ValidRedirect)
    }
}

/// Result of probing `https://<hostname>` for an HSTS policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HstsOutcome {
    /// Header value with the leading `max-age=` removed
    Present(String),
    /// No `Strict-Transport-Security` header
    Absent,
    /// DNS, TCP, TLS or timeout failure
    ConnectionError,
}

impl HstsOutcome {
    /// `true` for a network failure.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, HstsOutcome::ConnectionError)
    }

    /// `true` when the response advertised an HSTS policy.
    pub fn is_present(&self) -> bool {
        matches!(self, HstsOutcome::Present(_))
    }
}

/// One row of the report: a hostname and both probe outcomes.
///
/// Built once per configured hostname and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    hostname: String,
    redirect: RedirectOutcome,
    hsts: HstsOutcome,
}

impl SiteReport {
    /// Creates a report from both outcomes.
    pub fn new(hostname: impl Into<String>, redirect: RedirectOutcome, hsts: HstsOutcome) -> Self {
        Self {
            hostname: hostname.into(),
            redirect,
            hsts,
        }
    }

    /// Creates the combined row used when any probe of the site failed at the
    /// network level.
    pub fn connection_error(hostname: impl Into<String>) -> Self {
        Self::new(
            hostname,
            RedirectOutcome::ConnectionError,
            HstsOutcome::ConnectionError,
        )
    }

    /// The probed hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Outcome of the plain HTTP probe.
    pub fn redirect(&self) -> &RedirectOutcome {
        &self.redirect
    }

    /// Outcome of the HTTPS probe.
    pub fn hsts(&self) -> &HstsOutcome {
        &self.hsts
    }

    /// `true` if either probe failed at the network level.
    pub fn has_connection_error(&self) -> bool {
        self.redirect.is_connection_error() || self.hsts.is_connection_error()
    }
}
