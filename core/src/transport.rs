//! Network dispatch of `HttpRequest` descriptors.
//!
//! The only place in the crate that performs I/O. A non-200 status is not an
//! error here; it comes back as an `HttpResponse` and is judged by
//! `JikanClient::parse_response`. Failures to send, or to read the body of a
//! 200 response, surface as `ApiError::Transport`.
//!
//! The body is kept as raw bytes. Decoding is left to `serde_json::from_slice`
//! so that invalid UTF-8 fails instead of being replaced with U+FFFD.

use reqwest::Method;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub(crate) async fn execute(
    http: &reqwest::Client,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let mut builder = http.request(to_method(request.method), &request.uri);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(|e| ApiError::transport(&e))?;

    let status = response.status().as_u16();

    // The status outranks the body: an unreadable error body must not turn
    // `HTTP Error: <status>` into an exception.
    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) if status != 200 => {
            debug!(status, error = %err, "discarding unreadable error body");
            Vec::new()
        }
        Err(err) => return Err(ApiError::transport(&err)),
    };

    Ok(HttpResponse { status, body })
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_one_to_one() {
        assert_eq!(to_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_method(HttpMethod::Put), Method::PUT);
        assert_eq!(to_method(HttpMethod::Delete), Method::DELETE);
    }
}
