//! Directory-backed store: one pretty-printed JSON document per record,
//! named `<id>.json`. The directory is loaded into memory on open and every
//! write goes to disk before it becomes visible to readers.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::collection::Collection;
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;
use crate::query::InternFilter;
use crate::schema::Intern;

/// JSON-file-per-record document store
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    collection: RwLock<Collection>,
}

impl JsonFileStore {
    /// Open (creating if needed) the store at `dir` and load every record.
    ///
    /// Files that fail to parse, or whose email is already taken by an
    /// earlier file, are skipped with a warning.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let mut loaded: Vec<Intern> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_record(&path) {
                Ok(intern) => loaded.push(intern),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }

        // Oldest first so insertion order matches creation order
        loaded.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let mut collection = Collection::new();
        for intern in loaded {
            match collection.prepare_insert(&intern) {
                Ok(()) => collection.commit_insert(intern),
                Err(e) => tracing::warn!(id = %intern.id, error = %e, "skipping conflicting record"),
            }
        }

        tracing::info!(dir = %dir.display(), records = collection.len(), "json store loaded");

        Ok(Self {
            dir,
            collection: RwLock::new(collection),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, id: &Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write through a temp file so a crash never leaves a torn document
    fn save(&self, intern: &Intern) -> StoreResult<()> {
        let path = self.file_path(&intern.id);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(intern)?;
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, id: &Uuid) -> StoreResult<()> {
        let path = self.file_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collection>> {
        self.collection.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collection>> {
        self.collection.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn read_record(path: &Path) -> StoreResult<Intern> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl DocumentStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "json_dir"
    }

    fn insert(&self, intern: Intern) -> StoreResult<Intern> {
        let mut coll = self.write()?;
        coll.prepare_insert(&intern)?;
        self.save(&intern)?;
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
        self.save(&updated)?;
        coll.commit_update(updated.clone());
        Ok(Some(updated))
    }

    fn delete(&self, id: &Uuid) -> StoreResult<Option<Intern>> {
        let mut coll = self.write()?;
        if coll.get(id).is_none() {
            return Ok(None);
        }
        self.remove(id)?;
        Ok(coll.commit_delete(id))
    }

    fn ping(&self) -> StoreResult<()> {
        if !self.dir.is_dir() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("store directory {} is missing", self.dir.display()),
            )));
        }
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NewIntern, Role, Status};
    use chrono::Utc;
    use tempfile::TempDir;

    fn intern(email: &str) -> Intern {
        Intern::create(
            Uuid::new_v4(),
            NewIntern {
                name: "File Intern".into(),
                email: email.into(),
                role: Role::Frontend,
                status: Status::Interviewing,
                score: 70,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_insert_writes_file() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();

        let created = store.insert(intern("a@x.io")).unwrap();
        let path = tmp.path().join(format!("{}.json", created.id));
        assert!(path.exists());

        let on_disk: Intern = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(on_disk, created);
    }

    #[test]
    fn test_delete_removes_file() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();

        let created = store.insert(intern("a@x.io")).unwrap();
        store.delete(&created.id).unwrap();
        assert!(!tmp.path().join(format!("{}.json", created.id)).exists());
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(tmp.path()).unwrap();

        // A non-empty directory where the record file belongs makes the rename fail
        let record = intern("a@x.io");
        let target = tmp.path().join(format!("{}.json", record.id));
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(store.insert(record.clone()).is_err());
        assert!(!tmp.path().join(format!("{}.json.tmp", record.id)).exists());
        assert!(store.find_by_id(&record.id).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_files_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("garbage.json"), "{ not json").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let store = JsonFileStore::open(tmp.path()).unwrap();
        assert_eq!(store.count(&InternFilter::new()).unwrap(), 0);
    }

    #[test]
    fn test_ping_fails_when_directory_removed() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("interns");
        let store = JsonFileStore::open(&dir).unwrap();
        assert!(store.ping().is_ok());

        fs::remove_dir_all(&dir).unwrap();
        assert!(store.ping().is_err());
    }
}
