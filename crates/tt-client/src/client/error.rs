use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tt_core::CoreError;

/// Errors raised locally during API calls.
///
/// Remote non-2xx outcomes are not errors; they surface as a failed
/// [`ApiResponse`](crate::ApiResponse). What lands here is a violated
/// request precondition, a transport failure, or a 2xx body the client
/// cannot decode.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] CoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// The payload field named by a validation error, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ClientError::Validation(core) => core.parameter(),
            _ => None,
        }
    }

    /// True when the whole request object was absent.
    pub fn is_null_argument(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(CoreError::NullArgument { .. })
        )
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
