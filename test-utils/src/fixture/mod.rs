//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! entity-to-domain conversions and DTO mapping without persistence.

pub mod server;
