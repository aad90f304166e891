//! Transport DTOs shared by the HTTP boundary and its tests.

pub mod api;
pub mod flavor;
pub mod health;
pub mod image;
pub mod server;
