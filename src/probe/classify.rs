//! Response classification.
//!
//! Pure functions turning a response's status and headers into probe outcomes.
//! Kept separate from the request code so every rule can be tested without a
//! server.

use reqwest::header::{HeaderMap, HeaderValue, LOCATION};
use reqwest::StatusCode;

use crate::config::{HSTS_HEADER, MAX_AGE_PREFIX};
use crate::probe::target::expected_location;
use crate::probe::types::{HstsOutcome, RedirectOutcome};

/// Classifies the response to `http://<hostname>`.
///
/// A 301 is valid only if `Location` equals `https://<hostname>/` as an exact
/// string. A 301 without `Location` counts as a redirect to the empty string.
pub fn classify_redirect(hostname: &str, status: StatusCode, headers: &HeaderMap) -> RedirectOutcome {
    if status != StatusCode::MOVED_PERMANENTLY {
        return RedirectOutcome::InvalidStatus(status);
    }

    let location = headers.get(LOCATION).map(header_text).unwrap_or_default();
    if location == expected_location(hostname) {
        RedirectOutcome::ValidRedirect
    } else {
        RedirectOutcome::InvalidRedirectTarget(location)
    }
}

/// Classifies the response to `https://<hostname>`.
///
/// Only the first `Strict-Transport-Security` value is considered.
pub fn classify_hsts(headers: &HeaderMap) -> HstsOutcome {
    match headers.get_all(HSTS_HEADER).iter().next() {
        Some(value) => HstsOutcome::Present(strip_max_age(&header_text(value)).to_string()),
        None => HstsOutcome::Absent,
    }
}

/// Removes a leading `max-age=` from an HSTS header value.
///
/// Anything else in the value (further directives, whitespace) is kept as is.
pub fn strip_max_age(value: &str) -> &str {
    value.strip_prefix(MAX_AGE_PREFIX).unwrap_or(value)
}

// Header values are not guaranteed to be ASCII.
fn header_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}
