//! Request-scoped extractors and layers.

pub mod request_context;
