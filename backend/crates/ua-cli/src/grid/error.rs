use ua_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// Network failure or non-success status
    #[error("{message} {location}")]
    Fetch {
        message: String,
        location: ErrorLocation,
    },

    /// Body was not the expected `{ok, data, meta}` shape
    #[error("{message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Preferences error: {message} {location}")]
    Preferences {
        message: String,
        location: ErrorLocation,
    },
}

impl GridError {
    #[track_caller]
    pub fn fetch(message: impl Into<String>) -> Self {
        GridError::Fetch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        GridError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn preferences(message: impl Into<String>) -> Self {
        GridError::Preferences {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message shown to the user, without the call site.
    pub fn user_message(&self) -> &str {
        match self {
            GridError::Fetch { message, .. }
            | GridError::InvalidResponse { message, .. }
            | GridError::Preferences { message, .. } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
