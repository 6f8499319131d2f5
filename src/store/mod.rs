//! # Document Store
//!
//! Persistence for intern records behind the [`DocumentStore`] trait, plus
//! the [`StoreConnection`] lifecycle object the service layer owns.
//!
//! Backends:
//! - [`MemoryStore`]: process-local, lost on restart
//! - [`JsonFileStore`]: one JSON document per record in a directory
//!
//! Both enforce a unique index on `email`.

mod collection;
mod connection;
mod errors;
mod json_file;
mod memory;

pub use connection::{ConnectionStatus, StoreConfig, StoreConnection};
pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::query::InternFilter;
use crate::schema::Intern;

/// Record store operations
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Insert a new record.
    ///
    /// Fails with `DuplicateKey` if the id or email is already taken.
    fn insert(&self, intern: Intern) -> StoreResult<Intern>;

    /// Fetch a record by id
    fn find_by_id(&self, id: &Uuid) -> StoreResult<Option<Intern>>;

    /// Matching records, newest first, paged by `skip`/`limit`
    fn find(&self, filter: &InternFilter, skip: u64, limit: u64) -> StoreResult<Vec<Intern>>;

    /// Number of matching records, ignoring paging
    fn count(&self, filter: &InternFilter) -> StoreResult<u64>;

    /// Apply `apply` to the record with `id` and persist the result.
    ///
    /// Returns `Ok(None)` if no such record exists. The stored record is
    /// left unchanged when the result violates a unique index.
    fn update(&self, id: &Uuid, apply: &dyn Fn(&mut Intern)) -> StoreResult<Option<Intern>>;

    /// Remove a record, returning it if it existed
    fn delete(&self, id: &Uuid) -> StoreResult<Option<Intern>>;

    /// Check the store can serve requests
    fn ping(&self) -> StoreResult<()>;
}
