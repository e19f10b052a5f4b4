//! Error types for the Jikan client.
//!
//! # Design
//! Every way a call can go wrong is an `ApiError`, but `ApiError` never
//! escapes `JikanClient::call`: it is rendered into the description carried
//! by `CallResult::Failure`. The `Display` strings are therefore part of the
//! public contract. Non-200 statuses render as `HTTP Error: <status>`;
//! transport faults and undecodable bodies both render as
//! `Exception: <message>`.

use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than 200.
    #[error("HTTP Error: {status}")]
    Http { status: u16 },

    /// Sending the request or receiving the response failed.
    #[error("Exception: {0}")]
    Transport(String),

    /// A 200 response whose body is not valid JSON.
    #[error("Exception: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("client construction failed: {0}")]
    Client(String),
}

impl ApiError {
    pub fn transport(err: &(dyn StdError + 'static)) -> Self {
        ApiError::Transport(describe(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Flatten an error and its `source()` chain into one line.
///
/// reqwest's top-level message is usually just "error sending request for
/// url (...)"; the cause that matters sits further down the chain.
pub(crate) fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
