use sea_orm::DbErr;
use thiserror::Error;

use crate::server::model::server::{ServerAction, ServerStatus};

/// Failures reported by an infrastructure backend.
#[derive(Error, Debug)]
pub enum InfraError {
    /// The backend has no server with this ID.
    #[error("Server {0} not found")]
    ServerNotFound(String),

    /// The backend refused the transition from the state it observed.
    #[error("Backend rejected action '{action}' on server in status '{current}'")]
    TransitionRejected {
        current: ServerStatus,
        action: ServerAction,
    },

    /// The backing store failed.
    #[error(transparent)]
    Database(#[from] DbErr),
}
