//! Unified SDK error types.
//!
//! Server-reported failures ([`HttpError`]) and caller mistakes
//! ([`UsageError`]) are separate variants of [`SdkError`] so they can be told
//! apart with a single `match`.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// The HTTP status code, if the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.status),
            _ => None,
        }
    }

    /// The taxonomy kind, if this is a server-reported error.
    pub fn kind(&self) -> Option<HttpErrorKind> {
        match self {
            Self::Http(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Whether this error was caused by the caller rather than the server or network.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

// ─── HTTP taxonomy ───────────────────────────────────────────────────────────

/// Closed set of error kinds the API reports, keyed by status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    PayloadTooLarge,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    /// Any non-success status outside the table above.
    Other,
}

impl HttpErrorKind {
    /// Every kind with a fixed status code.
    pub const KNOWN: [HttpErrorKind; 9] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::PayloadTooLarge,
        Self::InternalServerError,
        Self::NotImplemented,
        Self::BadGateway,
        Self::ServiceUnavailable,
    ];

    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            413 => Self::PayloadTooLarge,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            _ => Self::Other,
        }
    }

    /// The status code this kind is keyed by. `None` for [`HttpErrorKind::Other`].
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::PayloadTooLarge => Some(413),
            Self::InternalServerError => Some(500),
            Self::NotImplemented => Some(501),
            Self::BadGateway => Some(502),
            Self::ServiceUnavailable => Some(503),
            Self::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::Other => "HTTP Exception",
        }
    }
}

impl std::fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-success response from the API.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{status} {kind}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct HttpError {
    pub status: u16,
    pub kind: HttpErrorKind,
    /// The `message` field of the error body, when present.
    pub message: Option<String>,
    /// The decoded error body. `None` if the body was not valid JSON.
    pub body: Option<Value>,
}

impl HttpError {
    /// Build an error from a status code and the raw response body.
    ///
    /// Error bodies are decoded as JSON whatever the declared content type.
    pub fn from_body(status: u16, raw: &[u8]) -> Self {
        let body = match serde_json::from_slice::<Value>(raw) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(status, error = %e, "Error response body is not valid JSON");
                None
            }
        };
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status,
            kind: HttpErrorKind::from_status(status),
            message,
            body,
        }
    }
}

// ─── Usage errors ────────────────────────────────────────────────────────────

/// Errors caused by how the SDK was called, raised before or instead of a
/// server round-trip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("No open session; call `open()` or use `scoped()` first")]
    NoSession,

    #[error("`{canonical}` and `{alias}` were both given with different values")]
    ConflictingAlias {
        canonical: &'static str,
        alias: &'static str,
    },

    #[error("Missing required parameter `{parameter}` for `{operation}`")]
    MissingParameter {
        operation: &'static str,
        parameter: String,
    },

    #[error("Unknown parameter `{parameter}` for `{operation}`")]
    UnknownParameter {
        operation: &'static str,
        parameter: String,
    },

    #[error("Expected {expected} response, got {found}")]
    UnexpectedResponse {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_round_trip_through_status() {
        for kind in HttpErrorKind::KNOWN {
            let status = kind.status().unwrap();
            assert_eq!(HttpErrorKind::from_status(status), kind);
        }
    }

    #[test]
    fn test_unknown_status_is_other() {
        assert_eq!(HttpErrorKind::from_status(418), HttpErrorKind::Other);
        assert_eq!(HttpErrorKind::from_status(429), HttpErrorKind::Other);
        assert_eq!(HttpErrorKind::Other.status(), None);
    }

    #[test]
    fn test_from_body_reads_message() {
        let err = HttpError::from_body(403, br#"{"message": "premium only", "code": 7}"#);
        assert_eq!(err.kind, HttpErrorKind::Forbidden);
        assert_eq!(err.message.as_deref(), Some("premium only"));
        assert_eq!(err.body.unwrap()["code"], 7);
    }

    #[test]
    fn test_from_body_without_message() {
        let err = HttpError::from_body(500, br#"{"error": true}"#);
        assert_eq!(err.kind, HttpErrorKind::InternalServerError);
        assert!(err.message.is_none());
        assert!(err.body.is_some());
    }

    #[test]
    fn test_from_body_not_json() {
        let err = HttpError::from_body(502, b"<html>bad gateway</html>");
        assert_eq!(err.kind, HttpErrorKind::BadGateway);
        assert!(err.message.is_none());
        assert!(err.body.is_none());
    }

    #[test]
    fn test_display() {
        let err = HttpError::from_body(401, br#"{"message": "invalid token"}"#);
        assert_eq!(err.to_string(), "401 Unauthorized: invalid token");

        let err = HttpError::from_body(418, b"{}");
        assert_eq!(err.to_string(), "418 HTTP Exception: no message");
    }

    #[test]
    fn test_sdk_error_classification() {
        let http: SdkError = HttpError::from_body(404, b"{}").into();
        assert_eq!(http.status(), Some(404));
        assert_eq!(http.kind(), Some(HttpErrorKind::NotFound));
        assert!(!http.is_usage());

        let usage: SdkError = UsageError::NoSession.into();
        assert!(usage.is_usage());
        assert_eq!(usage.status(), None);
    }
}
