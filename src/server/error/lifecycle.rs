use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDetailsDto, ErrorDto},
    server::model::server::{ServerAction, ServerStatus},
};

/// Expected, caller-recoverable failures of lifecycle and catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// No server with the requested ID exists.
    #[error("Server {0} not found")]
    ServerNotFound(String),

    /// The referenced flavor does not exist in the catalog.
    #[error("Flavor {0} not found")]
    FlavorNotFound(String),

    /// The referenced image does not exist in the catalog.
    #[error("Image {0} not found")]
    ImageNotFound(String),

    /// The action is not permitted from the server's current status.
    #[error("Cannot perform action '{action}' on server in status '{current}'")]
    InvalidStateTransition {
        current: ServerStatus,
        action: ServerAction,
    },
}

impl LifecycleError {
    /// Machine-readable error code placed in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ServerNotFound(_) => "SERVER_NOT_FOUND",
            Self::FlavorNotFound(_) => "FLAVOR_NOT_FOUND",
            Self::ImageNotFound(_) => "IMAGE_NOT_FOUND",
            Self::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidStateTransition { .. } => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        }
    }
}

/// Converts lifecycle errors into HTTP responses.
///
/// - `ServerNotFound` / `FlavorNotFound` / `ImageNotFound` → 404 Not Found
/// - `InvalidStateTransition` → 409 Conflict, details carry `current_status` and `action`
///
/// Logged at debug level; the service layer already logs rejected transitions.
impl IntoResponse for LifecycleError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "{}", self);

        let details = match &self {
            Self::InvalidStateTransition { current, action } => {
                Some(ErrorDetailsDto::Transition {
                    current_status: current.to_string(),
                    action: action.to_string(),
                })
            }
            _ => None,
        };

        (
            self.status_code(),
            Json(ErrorDto::new(self.code(), self.to_string(), details)),
        )
            .into_response()
    }
}
