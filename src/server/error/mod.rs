//! Error types and HTTP response handling.
//!
//! Provides the application's error hierarchy and the conversion of errors
//! into HTTP responses. `AppError` is the top-level error type returned by
//! services and controllers; its `IntoResponse` implementation maps each
//! variant onto a status code and the uniform `{success, message, data}`
//! envelope.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and
/// provides automatic conversion to HTTP responses. The business-rule
/// variants carry client-facing messages; infrastructure variants are
/// logged server-side and surface only a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for its own status code
    /// mapping (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged
    /// server-side. Any open transaction has been rolled back by the time
    /// this error propagates.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced career/enrollment/payment/user does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or state-transition violation: a duplicate non-voided
    /// installment, double void, duplicate name/username/DNI, or a guarded
    /// delete.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Malformed input: non-positive ids, installment numbers or amounts,
    /// empty or over-long fields.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the
    /// client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Business-rule errors keep their message in the envelope; everything
/// else is logged and answered with a generic 500 so internal details
/// never reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::failure(msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ApiResponse::failure(msg))).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::failure("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client. Used as the fallback for errors without a specific HTTP
/// mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure("Internal server error")),
        )
            .into_response()
    }
}
