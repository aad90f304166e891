//! HTTP request handlers.
//!
//! Handlers convert request DTOs into validated parameter types, open one
//! `UnitOfWork` per request, bind the configured infrastructure backend to it and
//! delegate to a service. The transaction is committed only after the service
//! returns successfully; every error path drops it, rolling back.

pub mod flavor;
pub mod health;
pub mod image;
pub mod server;

#[cfg(test)]
mod test;
