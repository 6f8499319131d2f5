//! Observability for the intern tracker
//!
//! Logging goes through `tracing`; this module installs the subscriber.
//! HTTP request spans come from `tower_http::trace::TraceLayer`.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
