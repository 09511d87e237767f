use serde::Deserialize;
use thiserror::Error;

/// Main error type for the Yelp Fusion client
#[derive(Debug, Error)]
pub enum YelpError {
    /// The client could not be constructed (e.g. missing API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required request field is missing or out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API returned status {status} {reason}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

impl YelpError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code, for `Api` errors only
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream error code from an `{"error": {"code": ...}}` body, e.g. `VALIDATION_ERROR`
    pub fn api_error_code(&self) -> Option<String> {
        self.error_detail().map(|d| d.code)
    }

    /// Upstream human readable description, when the body carried one
    pub fn api_error_description(&self) -> Option<String> {
        self.error_detail().and_then(|d| d.description)
    }

    fn error_detail(&self) -> Option<ErrorDetail> {
        match self {
            Self::Api { body, .. } => serde_json::from_str::<ErrorEnvelope>(body)
                .ok()
                .map(|e| e.error),
            _ => None,
        }
    }
}

/// Result type alias using YelpError
pub type Result<T> = std::result::Result<T, YelpError>;
