//! Core error types for the investment planner.
//!
//! Transport-specific errors (reqwest, etc.) are converted to these types by
//! the gateway implementation so the view-model stays transport-agnostic.

use thiserror::Error;

use crate::constants::NETWORK_ERROR_MESSAGE;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the investment planner.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-success HTTP status.
    ///
    /// The display text is always the fixed network message; the status and
    /// body are kept for logs and debugging only.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// A success response carried a body that is not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns the HTTP status for backend rejections, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Validation errors for form input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_hides_status_in_display() {
        let error = Error::Network {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Network response was not ok");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_network_error_keeps_detail_in_debug() {
        let error = Error::Network {
            status: 404,
            body: "missing".to_string(),
        };
        let debug = format!("{:?}", error);
        assert!(debug.contains("404"));
        assert!(debug.contains("missing"));
    }

    #[test]
    fn test_error_display() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "Request failed: connection refused");
        assert_eq!(error.status(), None);

        let error = Error::Validation(ValidationError::MissingField(
            "investmentName".to_string(),
        ));
        assert_eq!(
            error.to_string(),
            "Input validation failed: Required field 'investmentName' is missing"
        );
    }

    #[test]
    fn test_serde_error_becomes_decode() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(Error::from(err), Error::Decode(_)));
    }
}
