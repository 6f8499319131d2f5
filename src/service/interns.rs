//! # Intern Service
//!
//! Create, list, fetch, update and delete intern records. Every operation
//! first makes sure the store connection is up, then validates input, then
//! talks to the store.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use crate::query::{ListQuery, Page};
use crate::schema::{Intern, InternValidator};
use crate::store::{DocumentStore, StoreConnection};

/// Message returned after a successful delete
pub const DELETED_MESSAGE: &str = "Intern deleted successfully";

/// Delete confirmation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

/// CRUD operations over intern records
#[derive(Debug)]
pub struct InternService {
    connection: StoreConnection,
    validator: InternValidator,
}

impl InternService {
    pub fn new(connection: StoreConnection) -> Self {
        Self {
            connection,
            validator: InternValidator::new(),
        }
    }

    pub fn connection(&self) -> &StoreConnection {
        &self.connection
    }

    /// The live store, connecting first if needed
    fn store(&self) -> ServiceResult<Arc<dyn DocumentStore>> {
        self.connection
            .connect()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))
    }

    /// Validate and persist a new record
    pub fn create(&self, body: &Value) -> ServiceResult<Intern> {
        let store = self.store()?;
        let new = self.validator.validate_new(body)?;

        let intern = store.insert(Intern::create(Uuid::new_v4(), new, Utc::now()))?;
        tracing::info!(id = %intern.id, "intern created");
        Ok(intern)
    }

    /// One page of matching records plus pagination metadata
    pub fn list(&self, query: &ListQuery) -> ServiceResult<Page<Intern>> {
        let store = self.store()?;

        let data = store.find(&query.filter, query.page.skip(), query.page.limit())?;
        let total = store.count(&query.filter)?;

        Ok(Page::new(data, query.page, total))
    }

    pub fn get(&self, id: &str) -> ServiceResult<Intern> {
        let store = self.store()?;
        let id = parse_id(id)?;

        store.find_by_id(&id)?.ok_or(ServiceError::NotFound)
    }

    /// Apply a partial update.
    ///
    /// The stored record is untouched if validation or the email
    /// uniqueness check fails.
    pub fn update(&self, id: &str, body: &Value) -> ServiceResult<Intern> {
        let store = self.store()?;
        let id = parse_id(id)?;
        let patch = self.validator.validate_patch(body)?;

        let now = Utc::now();
        let intern = store
            .update(&id, &|intern| intern.apply(patch.clone(), now))?
            .ok_or(ServiceError::NotFound)?;

        tracing::info!(id = %intern.id, "intern updated");
        Ok(intern)
    }

    /// Hard-delete a record
    pub fn delete(&self, id: &str) -> ServiceResult<DeleteConfirmation> {
        let store = self.store()?;
        let id = parse_id(id)?;

        store.delete(&id)?.ok_or(ServiceError::NotFound)?;

        tracing::info!(%id, "intern deleted");
        Ok(DeleteConfirmation::new())
    }
}

/// Parse a record identifier
fn parse_id(raw: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use serde_json::json;

    fn service() -> InternService {
        InternService::new(StoreConnection::new(StoreConfig::Memory))
    }

    #[test]
    fn test_connects_lazily() {
        let svc = service();
        assert!(!svc.connection().is_ready());

        svc.create(&json!({"name": "Ann Lee", "email": "ann@x.io", "role": "Backend"}))
            .unwrap();
        assert!(svc.connection().is_ready());
    }

    #[test]
    fn test_create_then_get() {
        let svc = service();
        let created = svc
            .create(&json!({"name": "Ann Lee", "email": "ANN@x.io", "role": "Backend", "score": 77}))
            .unwrap();

        let fetched = svc.get(&created.id.to_string()).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.email, "ann@x.io");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-an-id").is_err());
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
        assert_eq!(
            parse_id("123"),
            Err(ServiceError::InvalidId("123".to_string()))
        );
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let svc = service();
        let created = svc
            .create(&json!({"name": "Ann Lee", "email": "ann@x.io", "role": "Backend"}))
            .unwrap();

        let updated = svc
            .update(&created.id.to_string(), &json!({"status": "Interviewing"}))
            .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.status.as_str(), "Interviewing");
    }

    #[test]
    fn test_unavailable_when_store_cannot_open() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        let svc = InternService::new(StoreConnection::new(StoreConfig::JsonDir { path: file }));
        let result = svc.list(&ListQuery::default());
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }
}
