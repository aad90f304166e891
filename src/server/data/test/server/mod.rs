use crate::server::{
    data::server::ServerRepository,
    model::{
        pagination::Pagination,
        server::{NewServer, ServerStatus},
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod transition;
