//! The error body returned by the JSON API and shown on the dashboard.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::validation::{FieldErrors, ValidationFailure},
};

/// The message used when a request body is not valid JSON.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload.";
/// The message used when a request body is over the size limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request payload is too large.";

/// Machine readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The client sent input that failed validation.
    ValidationError,
    /// The requested resource does not exist.
    NotFound,
    /// A stored record could not be read back as a valid transaction.
    UnprocessableEntity,
    /// The operation exists but is not available.
    NotImplemented,
    /// The server failed in a way the client cannot fix.
    InternalError,
    /// Fallback for failures that fit no other code.
    Unknown,
}

/// A uniform error value: `{code, message, status, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub message: String,
    pub status: u16,
    /// Field-keyed messages, only present for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

impl StructuredError {
    fn new(code: ErrorCode, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            code,
            message: message.into(),
            status: status.as_u16(),
            details: None,
        }
    }

    /// The error for a request body that could not be decoded.
    pub fn invalid_payload() -> Self {
        Self::new(
            ErrorCode::ValidationError,
            INVALID_PAYLOAD_MESSAGE,
            StatusCode::BAD_REQUEST,
        )
    }

    /// The error for invalid list query parameters.
    pub fn invalid_query(details: FieldErrors) -> Self {
        Self {
            details: Some(details),
            ..Self::new(
                ErrorCode::ValidationError,
                "Invalid query parameters",
                StatusCode::BAD_REQUEST,
            )
        }
    }

    /// The fallback for failures with no better description.
    pub fn unknown() -> Self {
        Self::new(
            ErrorCode::Unknown,
            "An unexpected error occurred",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// The HTTP status code, falling back to 500 for out of range values.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<Error> for StructuredError {
    fn from(error: Error) -> Self {
        let status = error.status_code();

        match error {
            Error::NotFound => Self::new(
                ErrorCode::NotFound,
                "The requested resource could not be found.",
                status,
            ),
            Error::DeleteMissingTransaction => {
                Self::new(ErrorCode::NotFound, "Transaction not found.", status)
            }
            Error::UpdateNotSupported => Self::new(
                ErrorCode::NotImplemented,
                "Update transaction API is not available.",
                status,
            ),
            Error::UnprocessableRecord(reason) => {
                tracing::warn!("unprocessable transaction record: {reason}");
                Self::new(
                    ErrorCode::UnprocessableEntity,
                    "Created transaction payload is invalid.",
                    status,
                )
            }
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                Self::new(ErrorCode::InternalError, error.to_string(), status)
            }
        }
    }
}

impl From<ValidationFailure> for StructuredError {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            details: Some(failure.field_errors),
            ..Self::new(
                ErrorCode::ValidationError,
                failure.message,
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

impl From<JsonRejection> for StructuredError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected JSON body: {rejection}");

        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => Self::invalid_payload(),
            JsonRejection::BytesRejection(rejection) => {
                let status = rejection.status();
                let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    PAYLOAD_TOO_LARGE_MESSAGE
                } else {
                    INVALID_PAYLOAD_MESSAGE
                };

                Self::new(ErrorCode::ValidationError, message, status)
            }
            _ => Self::unknown(),
        }
    }
}

impl IntoResponse for StructuredError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
