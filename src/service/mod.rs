//! # CRUD Service
//!
//! Intern operations on top of the record schema, query builder and
//! document store.

mod errors;
mod interns;

pub use errors::{ServiceError, ServiceResult};
pub use interns::{DeleteConfirmation, InternService, DELETED_MESSAGE};
