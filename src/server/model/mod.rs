//! Domain models and operation-specific parameter types.
//!
//! Models in this module sit between the transport DTOs in `crate::model` and the
//! SeaORM entities. Each model converts from its entity at the repository boundary
//! (`from_entity`) and into its DTO at the controller boundary (`into_dto`).
//! Parameter types are built from request DTOs and carry already-validated input.

pub mod flavor;
pub mod image;
pub mod pagination;
pub mod server;
