/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::meta::Status;
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the kops client
#[derive(Debug)]
pub enum AppError {
    /// The requested API group is not registered in the scheme
    GroupNotRegistered(String),
    /// The REST configuration cannot produce a transport
    InvalidConfig(String),
    /// A request could not be built from the given arguments
    InvalidInput(String),
    /// Transport-level failure reported by reqwest
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// IO failure
    Io(std::io::Error),
    /// The server rejected the credentials
    Unauthorized,
    /// The server kept throttling after all retries were spent
    RateLimitExceeded,
    /// The server answered with a `Status` describing the failure
    Api(Box<Status>),
    /// Non-success status without a decodable `Status` body
    Unexpected(StatusCode),
    /// The negotiated serializer does not support the media type
    UnsupportedMediaType(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::GroupNotRegistered(group) => write!(f, "group {group} is not registered"),
            AppError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Api(status) => write!(
                f,
                "api error ({}): {}",
                status.code,
                status.message.as_deref().unwrap_or("unknown")
            ),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::UnsupportedMediaType(media) => {
                write!(f, "unsupported media type: {media}")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// HTTP status code carried by the error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(status) => Some(status.code),
            AppError::Unexpected(status) => Some(status.as_u16()),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            AppError::RateLimitExceeded => Some(StatusCode::TOO_MANY_REQUESTS.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported that the object does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.reason_is("NotFound") || self.status_code() == Some(404)
    }

    /// Whether the server rejected a write because of a stale resource version
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.reason_is("Conflict") || self.status_code() == Some(409) && !self.is_already_exists()
    }

    /// Whether a create was rejected because the object already exists
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.reason_is("AlreadyExists")
    }

    fn reason_is(&self, reason: &str) -> bool {
        matches!(self, AppError::Api(status) if status.reason.as_deref() == Some(reason))
    }
}
