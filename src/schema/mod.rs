//! Intern record schema
//!
//! Defines the record shape and the rules every write must satisfy
//! before it reaches the store.

mod errors;
mod types;
mod validator;

pub use errors::{Field, FieldViolation, ValidationErrors, ValidationResult};
pub use types::{Intern, InternPatch, NewIntern, Role, Status, MAX_SCORE, MIN_NAME_LEN, MIN_SCORE};
pub use validator::InternValidator;
