use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Value cannot be null. {location}")]
    NullArgument { location: ErrorLocation },

    #[error("Argument cannot be null. (Parameter '{parameter}') {location}")]
    RequiredArgument {
        parameter: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// The payload object itself was absent.
    #[track_caller]
    pub fn null_argument() -> Self {
        CoreError::NullArgument {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A required payload field was absent.
    #[track_caller]
    pub fn required(parameter: &'static str) -> Self {
        CoreError::RequiredArgument {
            parameter,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The payload field name carried by a `RequiredArgument` error.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            CoreError::RequiredArgument { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
