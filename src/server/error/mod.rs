//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses carrying the uniform envelope
//! `{"error": {"code", "message", "details"}}`. The `AppError` enum is the top-level
//! error type; domain-specific errors (`LifecycleError`, `ValidationError`) own their
//! response mapping, while store and I/O failures collapse into a generic 500.

pub mod config;
pub mod infra;
pub mod lifecycle;
pub mod parse;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, infra::InfraError, lifecycle::LifecycleError,
        validation::ValidationError,
    },
};

const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Expected domain failure raised by the lifecycle service.
    ///
    /// Delegates to `LifecycleError::into_response()` (404 / 409).
    #[error(transparent)]
    LifecycleErr(#[from] LifecycleError),

    /// Malformed input with field-level detail.
    ///
    /// Delegates to `ValidationError::into_response()` (422).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or filesystem error, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Maps infrastructure failures onto the error taxonomy.
///
/// A server that vanished between the service's read and the backend's write is reported
/// as not found, and a transition the backend refused (e.g. a concurrent request won the
/// race) is reported as an invalid state transition carrying the state the backend saw.
impl From<InfraError> for AppError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::ServerNotFound(id) => LifecycleError::ServerNotFound(id).into(),
            InfraError::TransitionRejected { current, action } => {
                LifecycleError::InvalidStateTransition { current, action }.into()
            }
            InfraError::Database(err) => AppError::DbErr(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::field("body", rejection.body_text()).into()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::field("query", rejection.body_text()).into()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found / 409 Conflict - For `LifecycleErr`, delegated to `LifecycleError`
/// - 422 Unprocessable Entity - For `ValidationErr`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::LifecycleErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                INTERNAL_ERROR_CODE,
                INTERNAL_ERROR_MESSAGE,
                None,
            )),
        )
            .into_response()
    }
}
