//! # Query Builder
//!
//! Turns list parameters (search term, role, status, page, limit) into a
//! store query and computes pagination metadata for the result.

pub mod filter;
pub mod pagination;
pub mod params;

pub use filter::InternFilter;
pub use pagination::{Page, PageRequest, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use params::{ListQuery, QueryError, QueryResult};
