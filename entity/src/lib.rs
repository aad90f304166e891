//! SeaORM entities for the server lifecycle store.

pub mod prelude;

pub mod flavor;
pub mod image;
pub mod server;
