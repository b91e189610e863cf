//! Probe target construction and validation.

use url::Url;

use crate::error_handling::ProbeError;

/// URL scheme a probe is issued over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// The scheme name as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// An absolute URL derived from a scheme and a bare hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    url: Url,
}

impl ProbeTarget {
    /// Builds `<scheme>://<hostname>` and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidUrl` if the hostname is empty, the URL has
    /// no scheme separator, or the URL is not a well-formed absolute URI with
    /// a host.
    pub fn new(scheme: Scheme, hostname: &str) -> Result<Self, ProbeError> {
        let raw = format!("{}://{}", scheme.as_str(), hostname);
        let invalid = |reason: &str| ProbeError::InvalidUrl {
            url: raw.clone(),
            reason: reason.to_string(),
        };

        if hostname.is_empty() {
            return Err(invalid("hostname is empty"));
        }
        if !raw.contains(':') {
            return Err(invalid("URL must have protocol specified"));
        }

        let url = Url::parse(&raw).map_err(|e| invalid(&format!("URL is not well formed ({e})")))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("URL is not well formed (no host)"));
        }

        Ok(Self { url })
    }

    /// The validated URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// The only `Location` accepted for a valid redirect of `hostname`.
pub fn expected_location(hostname: &str) -> String {
    format!("https://{hostname}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_builds_http_url() {
        let target = ProbeTarget::new(Scheme::Http, "example.com").expect("valid hostname");
        assert_eq!(target.url().as_str(), "http://example.com/");
        assert_eq!(target.url().scheme(), "http");
    }

    #[test]
    fn test_target_builds_https_url_with_port() {
        let target = ProbeTarget::new(Scheme::Https, "127.0.0.1:8443").expect("valid hostname");
        assert_eq!(target.url().scheme(), "https");
        assert_eq!(target.url().port(), Some(8443));
    }

    #[test]
    fn test_target_rejects_empty_hostname() {
        let err = ProbeTarget::new(Scheme::Http, "").expect_err("empty hostname");
        match err {
            ProbeError::InvalidUrl { url, reason } => {
                assert_eq!(url, "http://");
                assert_eq!(reason, "hostname is empty");
            }
        }
    }

    #[test]
    fn test_target_rejects_malformed_hostname() {
        assert!(ProbeTarget::new(Scheme::Http, "exa mple.com").is_err());
        assert!(ProbeTarget::new(Scheme::Https, "example.com:notaport").is_err());
    }

    #[test]
    fn test_expected_location_has_trailing_slash() {
        assert_eq!(expected_location("example.com"), "https://example.com/");
    }
}
