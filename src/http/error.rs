//! Error taxonomy for Klara API calls.
//!
//! Each failure class stays distinguishable so callers can react differently
//! to "not authenticated", "not found", and "network unreachable" instead of
//! receiving one collapsed signal.

use reqwest::StatusCode;

/// Failure of a single API call.
#[derive(Debug)]
pub enum ApiError {
    /// Non-2xx response, carrying the original status and response body.
    Status { status: StatusCode, body: String },
    /// Connection or transport failure before a response was received.
    Network(reqwest::Error),
    /// The response body could not be decoded as the expected envelope.
    Decode(String),
}

impl ApiError {
    /// The HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Klara API returned HTTP {}", status)
                } else {
                    write!(f, "Klara API returned HTTP {}: {}", status, body)
                }
            }
            ApiError::Network(e) => {
                write!(f, "Failed to reach the Klara API: {}", e)
            }
            ApiError::Decode(msg) => {
                write!(f, "Failed to decode Klara API response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) => Some(e),
            _ => None,
        }
    }
}
