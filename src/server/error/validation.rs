use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDetailsDto, ErrorDto, FieldErrorDto};

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Malformed request input, keeping every offending field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Request validation failed")]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Creates an error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::default();
        err.push(field, message);
        err
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `Err(self)` when at least one field was rejected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(fields = self.fields.len(), "Request validation failed");

        let fields = self
            .fields
            .into_iter()
            .map(|f| FieldErrorDto {
                field: f.field,
                message: f.message,
            })
            .collect();

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto::new(
                "VALIDATION_ERROR",
                "Request validation failed",
                Some(ErrorDetailsDto::Fields(fields)),
            )),
        )
            .into_response()
    }
}
