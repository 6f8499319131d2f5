//! In-memory record collection shared by the store backends.
//!
//! Writes are split into a check step (`prepare_*`) that reads the current
//! state and enforces the unique indexes, and a `commit_*` step that applies
//! the change. Backends hold the write lock across both so the uniqueness
//! check and the write are atomic.

use std::collections::HashMap;

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use crate::query::InternFilter;
use crate::schema::Intern;

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion order, used to break creation-time ties
    seq: u64,
    intern: Intern,
}

#[derive(Debug, Default)]
pub(crate) struct Collection {
    next_seq: u64,
    records: HashMap<Uuid, Entry>,
    /// Unique index: email -> id
    emails: HashMap<String, Uuid>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Intern> {
        self.records.get(id).map(|e| &e.intern)
    }

    /// Matching records, newest first, after skipping `skip` and taking at
    /// most `limit`.
    pub fn find(&self, filter: &InternFilter, skip: u64, limit: u64) -> Vec<Intern> {
        let mut hits: Vec<&Entry> = self
            .records
            .values()
            .filter(|e| filter.matches(&e.intern))
            .collect();

        hits.sort_by(|a, b| {
            b.intern
                .created_at
                .cmp(&a.intern.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        hits.into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|e| e.intern.clone())
            .collect()
    }

    pub fn count(&self, filter: &InternFilter) -> u64 {
        self.records
            .values()
            .filter(|e| filter.matches(&e.intern))
            .count() as u64
    }

    /// Checks `intern` against the unique indexes
    pub fn prepare_insert(&self, intern: &Intern) -> StoreResult<()> {
        if self.records.contains_key(&intern.id) {
            return Err(StoreError::duplicate("id"));
        }
        if self.emails.contains_key(&intern.email) {
            return Err(StoreError::duplicate("email"));
        }
        Ok(())
    }

    pub fn commit_insert(&mut self, intern: Intern) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.emails.insert(intern.email.clone(), intern.id);
        self.records.insert(intern.id, Entry { seq, intern });
    }

    /// Produces the updated record without storing it.
    ///
    /// Returns `Ok(None)` if no record has `id`. The id is restored after
    /// `apply` runs, so a mutation can never re-key a record.
    pub fn prepare_update(
        &self,
        id: &Uuid,
        apply: &dyn Fn(&mut Intern),
    ) -> StoreResult<Option<Intern>> {
        let Some(entry) = self.records.get(id) else {
            return Ok(None);
        };

        let mut updated = entry.intern.clone();
        apply(&mut updated);
        updated.id = *id;

        match self.emails.get(&updated.email) {
            Some(owner) if owner != id => Err(StoreError::duplicate("email")),
            _ => Ok(Some(updated)),
        }
    }

    pub fn commit_update(&mut self, updated: Intern) {
        let Some(entry) = self.records.get_mut(&updated.id) else {
            return;
        };
        if entry.intern.email != updated.email {
            self.emails.remove(&entry.intern.email);
            self.emails.insert(updated.email.clone(), updated.id);
        }
        entry.intern = updated;
    }

    pub fn commit_delete(&mut self, id: &Uuid) -> Option<Intern> {
        let entry = self.records.remove(id)?;
        self.emails.remove(&entry.intern.email);
        Some(entry.intern)
    }
}
