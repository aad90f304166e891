use super::*;
use crate::server::{
    model::server::{
        CreateServerParams, ServerAction, ServerActionParams, ServerStatus, UpdateServerParams,
    },
    service::server::ServerService,
};
use sea_orm::PaginatorTrait;

mod concurrency;
mod create;
mod delete;
mod get;
mod list;

const SMALL: &str = "11111111-0000-0000-0000-000000000002";
const LARGE: &str = "11111111-0000-0000-0000-000000000004";
const UBUNTU: &str = "22222222-0000-0000-0000-000000000001";

fn create_params(name: &str, flavor_id: &str, image_id: &str) -> CreateServerParams {
    CreateServerParams {
        name: name.to_string(),
        flavor_id: flavor_id.to_string(),
        image_id: image_id.to_string(),
    }
}

fn action(action: ServerAction) -> ServerActionParams {
    ServerActionParams {
        action,
        flavor_id: None,
    }
}

fn resize(flavor_id: &str) -> ServerActionParams {
    ServerActionParams {
        action: ServerAction::Resize,
        flavor_id: Some(flavor_id.to_string()),
    }
}
