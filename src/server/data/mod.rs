//! Database repository layer for servers and the resource catalog.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity models into
//! domain models at the boundary. They are generic over `ConnectionTrait` so the same
//! code runs against a pooled connection or inside a request's `UnitOfWork`
//! transaction.

pub mod catalog;
pub mod flavor;
pub mod image;
pub mod server;
pub mod unit_of_work;

#[cfg(test)]
mod test;
