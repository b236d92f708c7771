//! Response envelope shared by every endpoint.
//!
//! Bodies are either `{"success": true, "payload": ...}` or
//! `{"success": false, "reason": "..."}`. Both fields are always present.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success<T> {
    /// Always `true`.
    pub success: bool,
    /// Operation result.
    pub payload: T,
}

impl<T> Success<T> {
    /// Wrap `payload` in a success envelope.
    pub const fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Failed response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Always `false`.
    pub success: bool,
    /// Human-readable explanation.
    pub reason: String,
}

impl Failure {
    /// Build a failure envelope with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: reason.into(),
        }
    }
}

/// Render `payload` as a JSON success envelope with `status`.
pub fn success<T: Serialize>(status: StatusCode, payload: T) -> HttpResponse {
    HttpResponse::build(status).json(Success::new(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serialises_with_flag_and_payload() {
        let value = serde_json::to_value(Success::new(vec![1, 2])).expect("serialise");
        assert_eq!(value, json!({ "success": true, "payload": [1, 2] }));
    }

    #[test]
    fn failure_serialises_with_flag_and_reason() {
        let value = serde_json::to_value(Failure::new("nope")).expect("serialise");
        assert_eq!(value, json!({ "success": false, "reason": "nope" }));
    }

    #[test]
    fn empty_payload_is_still_emitted() {
        let value = serde_json::to_value(Success::new(Vec::<u8>::new())).expect("serialise");
        assert_eq!(value, json!({ "success": true, "payload": [] }));
    }
}
