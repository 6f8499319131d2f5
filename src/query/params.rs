//! # List Query Parameters
//!
//! Parses `q`, `role`, `status`, `page` and `limit` from the query string
//! into a filter plus page request. Unknown keys are ignored and empty
//! values count as absent.

use std::collections::HashMap;

use thiserror::Error;

use super::filter::InternFilter;
use super::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Query parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Value is not an integer
    #[error("Invalid {param}: '{value}' is not an integer")]
    NotAnInteger { param: &'static str, value: String },
}

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// A parsed list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: InternFilter,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new(filter: InternFilter, page: PageRequest) -> Self {
        Self { filter, page }
    }

    /// Parse query parameters from a HashMap
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let value = |key: &str| params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let mut filter = InternFilter::new();
        if let Some(q) = value("q") {
            filter = filter.search(q);
        }
        if let Some(role) = value("role") {
            filter = filter.role(role);
        }
        if let Some(status) = value("status") {
            filter = filter.status(status);
        }

        let page = value("page")
            .map(|v| parse_int("page", v))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE as i64);
        let limit = value("limit")
            .map(|v| parse_int("limit", v))
            .transpose()?
            .unwrap_or(DEFAULT_LIMIT as i64);

        Ok(Self {
            filter,
            page: PageRequest::new(page, limit),
        })
    }
}

fn parse_int(param: &'static str, value: &str) -> QueryResult<i64> {
    value.parse().map_err(|_| QueryError::NotAnInteger {
        param,
        value: value.to_string(),
    })
}
