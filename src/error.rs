//! Error Types
//!
//! Failures of backend calls and of client-side form validation.

use serde::Deserialize;
use thiserror::Error;

/// A failed backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never reached the server (offline, DNS, CORS, ...)
    #[error("{0}")]
    Network(String),

    /// The server answered with a 4xx/5xx status. Displays the backend's
    /// `detail` message verbatim.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// A browser API failed while preparing a download or reading a file
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Build a status error from the raw response body.
    ///
    /// Uses the `detail` field when the body carries one, otherwise the
    /// canonical reason for the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| {
            let reason = reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Request failed");
            format!("{} {}", status, reason)
        });
        ApiError::Status { status, detail }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Client-side validation failure; raised before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be {expected}")]
    Invalid { field: &'static str, expected: &'static str },
}

/// Failure of a user action: rejected by validation, or by the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Error body shapes the backend produces
#[derive(Deserialize)]
#[serde(untagged)]
enum DetailBody {
    Message { detail: String },
    Validation { detail: Vec<ValidationEntry> },
}

#[derive(Deserialize)]
struct ValidationEntry {
    msg: String,
}

fn extract_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<DetailBody>(body).ok()? {
        DetailBody::Message { detail } => Some(detail),
        DetailBody::Validation { detail } if !detail.is_empty() => Some(
            detail.into_iter().map(|e| e.msg).collect::<Vec<_>>().join("; "),
        ),
        DetailBody::Validation { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_detail() {
        let err = ApiError::from_status(500, r#"{"detail":"Failed to inject data: boom"}"#);
        assert_eq!(err.to_string(), "Failed to inject data: boom");
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_status_error_joins_validation_messages() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required","type":"missing"},
                                 {"loc":["body","detail"],"msg":"field required","type":"missing"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.to_string(), "field required; field required");
    }

    #[test]
    fn test_status_error_without_body() {
        assert_eq!(ApiError::from_status(404, "").to_string(), "404 Not Found");
        assert_eq!(ApiError::from_status(502, "<html>").to_string(), "502 Bad Gateway");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::Required("Title").to_string(), "Title is required");
        let invalid = FormError::Invalid { field: "Price", expected: "a non-negative number" };
        assert_eq!(invalid.to_string(), "Price must be a non-negative number");
    }
}
