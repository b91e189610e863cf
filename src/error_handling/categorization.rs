//! Network error categorization.

use super::stats::ProbeStats;
use super::types::ConnectionErrorKind;

/// Categorizes a `reqwest::Error` into a `ConnectionErrorKind`.
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ConnectionErrorKind {
    if error.is_timeout() {
        ConnectionErrorKind::Timeout
    } else if error.is_connect() {
        ConnectionErrorKind::Connect
    } else if error.is_builder() {
        ConnectionErrorKind::Builder
    } else if error.is_request() {
        ConnectionErrorKind::Request
    } else {
        ConnectionErrorKind::Other
    }
}

/// Records a failed request in the statistics and returns its category.
pub fn update_error_stats(stats: &ProbeStats, error: &reqwest::Error) -> ConnectionErrorKind {
    let kind = categorize_reqwest_error(error);
    stats.increment_error(kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use std::net::TcpListener;
    use std::time::Duration;

    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        port
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        let client = reqwest::Client::new();
        let err = client
            .head(format!("http://127.0.0.1:{}/", closed_port()))
            .send()
            .await
            .expect_err("nothing listens on a closed port");

        assert_eq!(categorize_reqwest_error(&err), ConnectionErrorKind::Connect);
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/"))
                .times(..)
                .respond_with(delay_and_then(Duration::from_secs(2), status_code(200))),
        );
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .expect("Failed to create HTTP client");

        let err = client
            .head(server.url("/").to_string())
            .send()
            .await
            .expect_err("response arrives after the timeout");

        assert_eq!(categorize_reqwest_error(&err), ConnectionErrorKind::Timeout);
    }

    #[tokio::test]
    async fn test_update_error_stats_increments_category() {
        let stats = ProbeStats::new();
        let client = reqwest::Client::new();
        let err = client
            .head(format!("http://127.0.0.1:{}/", closed_port()))
            .send()
            .await
            .expect_err("nothing listens on a closed port");

        let kind = update_error_stats(&stats, &err);
        assert_eq!(stats.get_error_count(kind), 1);
        assert_eq!(stats.total_errors(), 1);
    }
}
