//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: HTTP handlers, the
//! lifecycle service, the infrastructure port with its simulated backend, and the
//! data access layer. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, DTO conversion and the per-request unit of work
//! - **Service Layer** (`service/`) - Validation order, the lifecycle state machine and logging
//! - **Infrastructure** (`infra/`) - The `Infrastructure` port and its backends
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request-scoped extractors such as `RequestContext`
//!
//! # Request Flow
//!
//! 1. **Router** assigns a request ID, opens the request span and routes to a controller
//! 2. **Controller** validates the DTO, begins a `UnitOfWork` and binds the backend to it
//! 3. **Service** checks existence, catalog references and the state machine
//! 4. **Infrastructure** backend performs the operation on the transaction
//! 5. **Controller** commits and converts the domain model to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod infra;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
