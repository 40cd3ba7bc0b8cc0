//! Typed errors and HTTP mapping.

use crate::response;
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid schema identifier: '{0}'")]
    InvalidSchema(String),
}

/// Failure reported by a [`crate::store::MaintainerStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Non-sqlx backends report their failures here.
    #[error("backend: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },
    /// Unexpected failure; `code` names the resource, `source` is logged but never sent.
    #[error("{code}: {source}")]
    Internal {
        code: &'static str,
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        AppError::Validation { errors }
    }
}

/// Undecodable path segments (e.g. invalid UTF-8) answer with the validation envelope.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(vec![rejection.body_text()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => response::not_found(&message).into_response(),
            AppError::Validation { errors } => response::validation_failed(errors).into_response(),
            AppError::Internal { code, message, .. } => {
                response::error(message, code, StatusCode::INTERNAL_SERVER_ERROR).into_response()
            }
        }
    }
}

/// Converts store failures into [`AppError::Internal`] at the handler boundary, logging the cause.
pub trait StoreResultExt<T> {
    fn or_internal(self, code: &'static str, message: &'static str) -> Result<T, AppError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn or_internal(self, code: &'static str, message: &'static str) -> Result<T, AppError> {
        self.map_err(|source| {
            tracing::error!(code, error = %source, "{}", message);
            AppError::Internal { code, message, source }
        })
    }
}
