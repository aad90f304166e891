use crate::server::{data::flavor::FlavorRepository, model::pagination::Pagination};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod get_paginated;
