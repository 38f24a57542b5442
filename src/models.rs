//! Wire types for the envelope contract.
//!
//! Every payload crossing the wire is wrapped in a single-field envelope:
//! request bodies are `{"data": <payload>}`, successful response bodies are
//! `{"data": <payload>}`, and error response bodies are
//! `{"data": {"messages": ["..."]}}`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-field wrapper around every wire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload for transmission.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error response body: `{"data": {"messages": [...]}}`.
///
/// Both levels tolerate absent or `null` fields, so a non-conforming error
/// body decodes into `None`s and degrades to a status-only
/// [`ErrorResponse`] instead of failing the call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    /// The inner error payload, when the server sent one.
    #[serde(default)]
    pub data: Option<ErrorMessages>,
}

/// Inner payload of an [`ErrorEnvelope`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorMessages {
    /// Human-readable error messages, in server order.
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}

/// Normalized application-level failure.
///
/// Carries the HTTP status code and the structured error messages the
/// server returned, in order. `messages` is empty when the response carried
/// no decodable error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// Decoded error messages; empty if the body had none.
    pub messages: Vec<String>,
}

impl ErrorResponse {
    /// Failure with decoded messages.
    pub fn new(status: u16, messages: Vec<String>) -> Self {
        Self { status, messages }
    }

    /// Status-only failure, used when the error body was absent or
    /// undecodable.
    pub fn status_only(status: u16) -> Self {
        Self {
            status,
            messages: Vec::new(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            write!(f, "API error {}", self.status)
        } else {
            write!(f, "API error {}: {}", self.status, self.messages.join("; "))
        }
    }
}

/// Application-level outcome of a request: the decoded payload, or the
/// normalized error the server returned.
///
/// Transport failures (network, timeout, cancellation) never appear here;
/// they travel through [`crate::Error`] on the outer [`crate::Result`].
pub type ApiResult<T> = std::result::Result<T, ErrorResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trip() {
        let env = Envelope::new(vec![1, 2, 3]);
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"data":[1,2,3]}"#);

        let back: Envelope<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }

    #[test]
    fn test_error_envelope_tolerates_missing_fields() {
        let env: ErrorEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_none());

        let env: ErrorEnvelope = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(env.data.is_none());

        let env: ErrorEnvelope = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(env.data.unwrap().messages.is_none());

        let env: ErrorEnvelope = serde_json::from_str(r#"{"data":{"messages":null}}"#).unwrap();
        assert!(env.data.unwrap().messages.is_none());
    }

    #[test]
    fn test_error_envelope_decodes_messages_in_order() {
        let env: ErrorEnvelope =
            serde_json::from_str(r#"{"data":{"messages":["first","second"]}}"#).unwrap();
        let messages = env.data.unwrap().messages.unwrap();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_error_response_display() {
        let err = ErrorResponse::status_only(500);
        assert_eq!(err.to_string(), "API error 500");

        let err = ErrorResponse::new(400, vec!["bad input".into(), "worse input".into()]);
        assert_eq!(err.to_string(), "API error 400: bad input; worse input");
    }
}
