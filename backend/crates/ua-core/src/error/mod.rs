use crate::ErrorLocation;

use std::fmt;
use std::result::Result as StdResult;

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, addressed by a dotted path
/// such as `emails.1.email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Validation failed with {} field error(s) {location}", errors.len())]
    Fields {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Invalid telephone type: {value} {location}")]
    InvalidTelephoneType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid CEP: {value} {location}")]
    InvalidCep {
        value: String,
        location: ErrorLocation,
    },

    #[error("Index {index} out of range for {len} record(s) {location}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
