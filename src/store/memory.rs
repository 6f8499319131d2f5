//! Process-local store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::collection::Collection;
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;
use crate::query::InternFilter;
use crate::schema::Intern;

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RwLock<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collection>> {
        self.collection.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collection>> {
        self.collection.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn insert(&self, intern: Intern) -> StoreResult<Intern> {
        let mut coll = self.write()?;
        coll.prepare_insert(&intern)?;
        coll.commit_insert(intern.clone());
        Ok(intern)
    }

    fn find_by_id(&self, id: &Uuid) -> StoreResult<Option<Intern>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn find(&self, filter: &InternFilter, skip: u64, limit: u64) -> StoreResult<Vec<Intern>> {
        Ok(self.read()?.find(filter, skip, limit))
    }

    fn count(&self, filter: &InternFilter) -> StoreResult<u64> {
        Ok(self.read()?.count(filter))
    }

    fn update(&self, id: &Uuid, apply: &dyn Fn(&mut Intern)) -> StoreResult<Option<Intern>> {
        let mut coll = self.write()?;
        let Some(updated) = coll.prepare_update(id, apply)? else {
            return Ok(None);
        };
        coll.commit_update(updated.clone());
        Ok(Some(updated))
    }

    fn delete(&self, id: &Uuid) -> StoreResult<Option<Intern>> {
        Ok(self.write()?.commit_delete(id))
    }

    fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }
}
