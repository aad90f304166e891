use thiserror::Error;

use crate::server::model::server::ServerAction;

/// Failures turning a wire or storage name into a lifecycle enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown server status '{0}'")]
    UnknownStatus(String),

    #[error(
        "unknown action '{0}', must be one of: {valid}",
        valid = ServerAction::ALL.map(|action| action.as_str()).join(", ")
    )]
    UnknownAction(String),
}
