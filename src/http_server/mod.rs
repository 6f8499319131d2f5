//! # HTTP Server Module
//!
//! Axum server exposing the intern API.
//!
//! # Endpoints
//!
//! - `/api/health` - Service and store status
//! - `/api/interns/*` - Intern CRUD, search and pagination
//!
//! Every failure answers with the `{ "error": { "message", "code" } }`
//! envelope. Unknown paths and unsupported methods both get a 404
//! `NOT_FOUND`.

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod intern_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{route_not_found, ApiError, ApiResult, ErrorBody, ErrorEnvelope};
pub use server::HttpServer;
