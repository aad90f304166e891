use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Uniform error envelope: `{"error": {"code", "message", "details"}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: ErrorBodyDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorBodyDto {
    pub code: String,
    pub message: String,
    pub details: Option<ErrorDetailsDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetailsDto {
    Transition {
        current_status: String,
        action: String,
    },
    Fields(Vec<FieldErrorDto>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl ErrorDto {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<ErrorDetailsDto>,
    ) -> Self {
        Self {
            error: ErrorBodyDto {
                code: code.into(),
                message: message.into(),
                details,
            },
        }
    }
}

/// Raw `limit`/`offset` query parameters, validated by the server into a `Pagination`.
#[derive(Deserialize, Debug, Default, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of items to return (1-100, default 20)
    pub limit: Option<i64>,
    /// Number of items to skip (>= 0, default 0)
    pub offset: Option<i64>,
}
