//! Business logic layer.
//!
//! Services are constructed per request around an `Infrastructure` backend already
//! bound to the request's unit of work, plus the request's `RequestContext`. They
//! enforce validation order and the lifecycle state machine, convert backend failures
//! into the application's error taxonomy, and own the structured logging of every
//! mutation.

pub mod flavor;
pub mod image;
pub mod server;

#[cfg(test)]
mod test;
