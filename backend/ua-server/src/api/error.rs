//! REST API error types
//!
//! Every failure renders as `{ ok: false, message, error: { code, message, ... } }`
//! so clients can read `message` without knowing the error shape.

use ua_core::{CoreError, FieldError};
use ua_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub message: String,
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400, optionally carrying one error per field
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        fields: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 502, a third-party service failed
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            fields: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing message, without the source location.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::Conflict { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Upstream { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (code, field, fields) = match &self {
            Self::NotFound { .. } => ("NOT_FOUND", None, Vec::new()),
            Self::Validation { field, fields, .. } => {
                ("VALIDATION_ERROR", field.clone(), fields.clone())
            }
            Self::Conflict { .. } => ("CONFLICT", None, Vec::new()),
            Self::BadRequest { .. } => ("BAD_REQUEST", None, Vec::new()),
            Self::Upstream { .. } => ("UPSTREAM_ERROR", None, Vec::new()),
            Self::Internal { .. } => ("INTERNAL_ERROR", None, Vec::new()),
        };

        let message = self.message().to_string();
        let body = ApiErrorResponse {
            ok: false,
            message: message.clone(),
            error: ApiErrorBody {
                code: code.into(),
                message,
                field,
                fields,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Erro interno do servidor".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::UserNotFound { .. } => ApiError::NotFound {
                message: "Usuário não encontrado".to_string(),
                location,
            },
            DbError::ChildNotFound {
                collection,
                id,
                user_id,
                ..
            } => ApiError::Conflict {
                message: format!(
                    "Registro {} de {} não pertence ao usuário {}",
                    id, collection, user_id
                ),
                location,
            },
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Erro interno do servidor".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Fields { errors, .. } => ApiError::Validation {
                message: errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "Dados inválidos".to_string()),
                field: None,
                fields: errors,
                location,
            },
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                fields: Vec::new(),
                location,
            },
            CoreError::InvalidTelephoneType { value, .. } => ApiError::Validation {
                message: format!("Tipo de telefone inválido: {}", value),
                field: Some("type".to_string()),
                fields: Vec::new(),
                location,
            },
            CoreError::InvalidCep { value, .. } => ApiError::Validation {
                message: format!("CEP inválido: {} (deve ter 8 dígitos)", value),
                field: Some("zip_code".to_string()),
                fields: Vec::new(),
                location,
            },
            CoreError::IndexOutOfRange { index, len, .. } => ApiError::BadRequest {
                message: format!("Índice {} fora do intervalo ({} registro(s))", index, len),
                location,
            },
            CoreError::PasswordHash { message, .. } => {
                log::error!("Password hashing failed: {}", message);
                ApiError::Internal {
                    message: "Erro interno do servidor".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Corpo da requisição inválido: {}", rejection.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
