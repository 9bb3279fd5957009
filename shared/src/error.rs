//! Error types for API calls and the flat submission failure shown to users.

use thiserror::Error;

/// Failure of one API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server rejected the credentials.
    #[error("Unauthorized: please sign in again")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
    },
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Map a non-success status to an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            status => ApiError::Http {
                status,
            },
        }
    }

    /// Stable category name, used as the alert title.
    pub fn name(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NetworkError",
            ApiError::Unauthorized => "UnauthorizedError",
            ApiError::Http {
                ..
            } => "HttpError",
            ApiError::Serialize(_) => "SerializeError",
            ApiError::Parse(_) => "ParseError",
        }
    }
}

/// A failed article submission as shown in the error alert.
///
/// There is one failure kind; the name and message are carried through
/// from whatever went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    /// Failure category, shown as the alert title.
    pub name: String,
    /// Failure detail, shown as the alert body.
    pub message: String,
}

impl SubmitFailure {
    /// Build a failure from a name and message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<ApiError> for SubmitFailure {
    fn from(err: ApiError) -> Self {
        SubmitFailure::new(err.name(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, SubmitFailure};

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(500),
            ApiError::Http {
                status: 500
            }
        );
    }

    #[test]
    fn failure_carries_name_and_message() {
        let failure = SubmitFailure::from(ApiError::Http {
            status: 502,
        });
        assert_eq!(failure.name, "HttpError");
        assert_eq!(failure.message, "HTTP error: 502");

        let failure = SubmitFailure::from(ApiError::Network("connection reset".to_string()));
        assert_eq!(failure.name, "NetworkError");
        assert_eq!(failure.message, "Network error: connection reset");
    }
}
