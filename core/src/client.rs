//! Request pipeline for the Jikan API.
//!
//! # Design
//! `JikanClient` holds its configuration and a shared `reqwest::Client` and
//! carries no mutable state between calls, so it can be cloned freely and
//! used from many tasks at once. A call is split into three steps:
//! `build_request` produces an `HttpRequest`, `transport::execute` performs
//! the round-trip, and `parse_response` normalizes the `HttpResponse`. The
//! first and last steps are pure; only the middle one suspends.
//!
//! Whatever happens, `call` returns a `CallResult`. Errors are values here.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{describe, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::CallResult;

/// Asynchronous, stateless client for the Jikan API.
#[derive(Debug, Clone)]
pub struct JikanClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl JikanClient {
    /// Build a client from `config`.
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.validate_certificates)
            .build()
            .map_err(|e| ApiError::Client(describe(&e)))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Describe a request without sending it.
    ///
    /// `path` must start with `/` and may already carry a query suffix. The
    /// body is kept only for POST and PUT, and only when non-empty.
    pub fn build_request(&self, path: &str, method: HttpMethod, body: Option<&str>) -> HttpRequest {
        let body = body
            .filter(|b| method.allows_body() && !b.is_empty())
            .map(str::to_string);
        HttpRequest {
            method,
            uri: format!("{}{path}", self.config.base_url),
            headers: vec![
                ("Host".to_string(), self.config.host.clone()),
                ("User-Agent".to_string(), self.config.user_agent.clone()),
            ],
            body,
        }
    }

    /// Normalize a response: 200 with a JSON body is a success, anything
    /// else is a failure.
    pub fn parse_response(&self, response: HttpResponse) -> CallResult {
        normalize(response).into()
    }

    /// Send a request to `path` and wait for its outcome.
    pub async fn call(&self, path: &str, method: HttpMethod, body: Option<&str>) -> CallResult {
        let request = self.build_request(path, method, body);
        debug!(method = %request.method, uri = %request.uri, "dispatching request");

        let outcome = transport::execute(&self.http, request)
            .await
            .and_then(|response| {
                debug!(status = response.status, path, "response received");
                normalize(response)
            });

        let result = CallResult::from(outcome);
        if let CallResult::Failure(description) = &result {
            warn!(%method, path, %description, "call failed");
        }
        result
    }

    pub async fn get(&self, path: &str) -> CallResult {
        self.call(path, HttpMethod::Get, None).await
    }
}

fn normalize(response: HttpResponse) -> Result<Value, ApiError> {
    check_status(&response)?;
    Ok(serde_json::from_slice(&response.body)?)
}

/// Only 200 counts as success; other 2xx codes are failures too.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> JikanClient {
        JikanClient::new(ClientConfig::default().with_base_url("http://localhost:3000")).unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_get_request() {
        let req = client().build_request("/anime/1", HttpMethod::Get, None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.uri, "http://localhost:3000/anime/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn fixed_headers_are_attached() {
        let req = client().build_request("/anime/1", HttpMethod::Delete, None);
        assert_eq!(
            req.headers,
            vec![
                ("Host".to_string(), "api.jikan.moe".to_string()),
                (
                    "User-Agent".to_string(),
                    crate::config::DEFAULT_USER_AGENT.to_string()
                ),
            ]
        );
    }

    #[test]
    fn custom_header_values_are_used() {
        let client = JikanClient::new(
            ClientConfig::default()
                .with_host("example.test")
                .with_user_agent("jikan-core-tests"),
        )
        .unwrap();
        let req = client.build_request("/seasons", HttpMethod::Get, None);
        assert_eq!(req.header("host"), Some("example.test"));
        assert_eq!(req.header("user-agent"), Some("jikan-core-tests"));
        assert_eq!(req.uri, "https://api.jikan.moe/v4/seasons");
    }

    #[test]
    fn query_suffix_is_kept_verbatim() {
        let req = client().build_request("/anime?q=a%26b&sfw=", HttpMethod::Get, None);
        assert_eq!(req.uri, "http://localhost:3000/anime?q=a%26b&sfw=");
    }

    #[test]
    fn body_attached_for_post_and_put() {
        let post = client().build_request("/echo", HttpMethod::Post, Some(r#"{"a":1}"#));
        assert_eq!(post.body.as_deref(), Some(r#"{"a":1}"#));
        let put = client().build_request("/echo", HttpMethod::Put, Some("x"));
        assert_eq!(put.body.as_deref(), Some("x"));
    }

    #[test]
    fn body_dropped_for_get_and_delete() {
        assert!(client()
            .build_request("/echo", HttpMethod::Get, Some("x"))
            .body
            .is_none());
        assert!(client()
            .build_request("/echo", HttpMethod::Delete, Some("x"))
            .body
            .is_none());
    }

    #[test]
    fn empty_body_is_dropped() {
        let req = client().build_request("/echo", HttpMethod::Post, Some(""));
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_success() {
        let result = client().parse_response(response(200, r#"{"data": 1}"#));
        assert_eq!(result, CallResult::Success(json!({"data": 1})));
    }

    #[test]
    fn parse_not_found() {
        let result = client().parse_response(response(404, r#"{"status":404}"#));
        assert_eq!(result, CallResult::Failure("HTTP Error: 404".to_string()));
    }

    #[test]
    fn parse_other_success_codes_as_failure() {
        let result = client().parse_response(response(204, ""));
        assert_eq!(result.failure(), Some("HTTP Error: 204"));
    }

    #[test]
    fn parse_bad_json() {
        let result = client().parse_response(response(200, "not json"));
        let description = result.failure().unwrap();
        assert!(description.starts_with("Exception: "), "{description}");
    }

    #[test]
    fn parse_invalid_utf8_as_exception() {
        let result = client().parse_response(HttpResponse {
            status: 200,
            body: b"{\"t\":\"\xff\"}".to_vec(),
        });
        let description = result.failure().expect("expected failure");
        assert!(description.starts_with("Exception: "), "{description}");
    }

    #[test]
    fn invalid_utf8_error_body_still_reports_status() {
        let result = client().parse_response(HttpResponse {
            status: 502,
            body: vec![0xff, 0xfe],
        });
        assert_eq!(result.failure(), Some("HTTP Error: 502"));
    }

    #[test]
    fn error_status_wins_over_bad_json() {
        let result = client().parse_response(response(500, "<html>oops</html>"));
        assert_eq!(result.failure(), Some("HTTP Error: 500"));
    }

    #[test]
    fn certificates_validated_unless_opted_out() {
        assert!(client().config().validate_certificates);

        let client = JikanClient::new(ClientConfig::default().accept_invalid_certs()).unwrap();
        assert!(!client.config().validate_certificates);
    }
}
