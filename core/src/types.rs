//! The uniform outcome of a call.
//!
//! # Design
//! Every call resolves to exactly one `CallResult`. Success wraps the response
//! body as an opaque JSON document; failure carries a human-readable
//! description. Callers never see an `Err` or a panic from the pipeline, so
//! they can match on the two variants and nothing else.

use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// Status 200 and a body that parsed as JSON.
    Success(Value),
    /// `HTTP Error: <status>` or `Exception: <message>`.
    Failure(String),
}

impl CallResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            CallResult::Success(value) => Some(value),
            CallResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CallResult::Success(_) => None,
            CallResult::Failure(description) => Some(description),
        }
    }

    pub fn into_result(self) -> Result<Value, String> {
        match self {
            CallResult::Success(value) => Ok(value),
            CallResult::Failure(description) => Err(description),
        }
    }
}

impl From<Result<Value, ApiError>> for CallResult {
    fn from(outcome: Result<Value, ApiError>) -> Self {
        match outcome {
            Ok(value) => CallResult::Success(value),
            Err(err) => CallResult::Failure(err.to_string()),
        }
    }
}
