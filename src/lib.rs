//! intern-tracker - Intern candidate records over a REST API
//!
//! Layers, leaf first:
//! - `schema`: record shape and validation
//! - `query`: search, filters and pagination
//! - `store`: document store backends and connection lifecycle
//! - `service`: CRUD operations
//! - `http_server`: axum routes and the error envelope
//! - `cli`, `observability`: process entry and logging

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
pub mod service;
pub mod store;
