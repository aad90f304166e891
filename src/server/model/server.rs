//! Server domain models, the lifecycle state machine, and operation parameters.
//!
//! `ServerStatus::transition` is the single source of truth for which actions are
//! legal from which state. Services consult it before delegating to the
//! infrastructure backend, and backends use the same table to guard their writes.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::server::{
        CreateServerDto, PaginatedServersDto, ServerActionDto, ServerDto, UpdateServerDto,
    },
    server::{
        error::{parse::ParseError, validation::ValidationError},
        model::pagination::Page,
    },
};

pub const MAX_NAME_LEN: usize = 255;

/// Lifecycle status of a server.
///
/// `Build`, `Reboot` and `Resize` are placeholders for backends with asynchronous
/// provisioning. Nothing in this service produces them and no action leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerStatus {
    Active,
    Shutoff,
    Build,
    Reboot,
    Resize,
    VerifyResize,
}

impl ServerStatus {
    pub const ALL: [ServerStatus; 6] = [
        ServerStatus::Active,
        ServerStatus::Shutoff,
        ServerStatus::Build,
        ServerStatus::Reboot,
        ServerStatus::Resize,
        ServerStatus::VerifyResize,
    ];

    /// Wire and storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Active => "ACTIVE",
            ServerStatus::Shutoff => "SHUTOFF",
            ServerStatus::Build => "BUILD",
            ServerStatus::Reboot => "REBOOT",
            ServerStatus::Resize => "RESIZE",
            ServerStatus::VerifyResize => "VERIFY_RESIZE",
        }
    }

    /// Returns the status reached by applying `action`, or `None` if the action is not
    /// permitted from this status.
    ///
    /// | Current        | Action           | Result  |
    /// |----------------|------------------|---------|
    /// | ACTIVE         | stop             | SHUTOFF |
    /// | ACTIVE         | reboot           | ACTIVE  |
    /// | ACTIVE         | resize           | ACTIVE  |
    /// | SHUTOFF        | start            | ACTIVE  |
    /// | VERIFY_RESIZE  | confirm_resize   | ACTIVE  |
    pub fn transition(self, action: ServerAction) -> Option<ServerStatus> {
        match (self, action) {
            (ServerStatus::Active, ServerAction::Stop) => Some(ServerStatus::Shutoff),
            (ServerStatus::Active, ServerAction::Reboot) => Some(ServerStatus::Active),
            (ServerStatus::Active, ServerAction::Resize) => Some(ServerStatus::Active),
            (ServerStatus::Shutoff, ServerAction::Start) => Some(ServerStatus::Active),
            (ServerStatus::VerifyResize, ServerAction::ConfirmResize) => {
                Some(ServerStatus::Active)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

/// Lifecycle action a client can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerAction {
    Start,
    Stop,
    Reboot,
    Resize,
    ConfirmResize,
}

impl ServerAction {
    pub const ALL: [ServerAction; 5] = [
        ServerAction::Start,
        ServerAction::Stop,
        ServerAction::Reboot,
        ServerAction::Resize,
        ServerAction::ConfirmResize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerAction::Start => "start",
            ServerAction::Stop => "stop",
            ServerAction::Reboot => "reboot",
            ServerAction::Resize => "resize",
            ServerAction::ConfirmResize => "confirm_resize",
        }
    }
}

impl fmt::Display for ServerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServerAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// A managed server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub status: ServerStatus,
    pub flavor_id: String,
    pub image_id: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Server)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known lifecycle status
    pub fn from_entity(entity: entity::server::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<ServerStatus>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse status: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            status,
            flavor_id: entity.flavor_id,
            image_id: entity.image_id,
            ip_address: entity.ip_address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            status: self.status.to_string(),
            flavor_id: self.flavor_id,
            image_id: self.image_id,
            ip_address: self.ip_address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Server> {
    pub fn into_dto(self) -> PaginatedServersDto {
        let next_offset = self.next_offset();

        PaginatedServersDto {
            items: self.items.into_iter().map(Server::into_dto).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next_offset,
        }
    }
}

/// Fully resolved row handed to the repository on insert.
#[derive(Debug, Clone)]
pub struct NewServer {
    pub id: String,
    pub name: String,
    pub status: ServerStatus,
    pub flavor_id: String,
    pub image_id: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServerParams {
    pub name: String,
    pub flavor_id: String,
    pub image_id: String,
}

impl CreateServerParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateServerParams)` - Name is 1-255 characters and both IDs are non-empty
    /// - `Err(ValidationError)` - One entry per offending field
    pub fn from_dto(dto: CreateServerDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        validate_name(&dto.name, &mut errors);
        if dto.flavor_id.is_empty() {
            errors.push("flavor_id", "flavor_id must not be empty");
        }
        if dto.image_id.is_empty() {
            errors.push("image_id", "image_id must not be empty");
        }

        errors.into_result()?;

        Ok(Self {
            name: dto.name,
            flavor_id: dto.flavor_id,
            image_id: dto.image_id,
        })
    }
}

/// Parameters for a partial metadata update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateServerParams {
    pub name: Option<String>,
}

impl UpdateServerParams {
    pub fn from_dto(dto: UpdateServerDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        if let Some(name) = &dto.name {
            validate_name(name, &mut errors);
        }

        errors.into_result()?;

        Ok(Self { name: dto.name })
    }
}

/// Parameters for a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerActionParams {
    pub action: ServerAction,
    /// Target flavor, present exactly when `action` is `Resize`.
    pub flavor_id: Option<String>,
}

impl ServerActionParams {
    /// Validates an action request.
    ///
    /// `flavor_id` is required for `resize` and rejected for every other action.
    pub fn from_dto(dto: ServerActionDto) -> Result<Self, ValidationError> {
        let action = dto
            .action
            .parse::<ServerAction>()
            .map_err(|e| ValidationError::field("action", e.to_string()))?;

        match (action, dto.flavor_id) {
            (ServerAction::Resize, None) => Err(ValidationError::field(
                "flavor_id",
                "flavor_id is required for resize",
            )),
            (ServerAction::Resize, Some(flavor_id)) if flavor_id.is_empty() => Err(
                ValidationError::field("flavor_id", "flavor_id must not be empty"),
            ),
            (ServerAction::Resize, Some(flavor_id)) => Ok(Self {
                action,
                flavor_id: Some(flavor_id),
            }),
            (_, Some(_)) => Err(ValidationError::field(
                "flavor_id",
                format!("flavor_id is only accepted for resize, not {}", action),
            )),
            (_, None) => Ok(Self {
                action,
                flavor_id: None,
            }),
        }
    }
}

fn validate_name(name: &str, errors: &mut ValidationError) {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        errors.push(
            "name",
            format!("name must be between 1 and {} characters", MAX_NAME_LEN),
        );
    }
}
