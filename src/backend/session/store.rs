//! Where the session record lives between launches.

use super::{SessionError, SessionRecord};
use crate::backend::utils::paths::get_entry_path;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Key/value access to the persisted session.
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` when nothing is stored.
    fn read(&self) -> Result<Option<SessionRecord>, SessionError>;

    fn save(&self, record: &SessionRecord) -> Result<(), SessionError>;

    /// Removing an absent session succeeds.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Keeps the record as a JSON file named after the storage key.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: get_entry_path(data_dir, key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Result<Option<SessionRecord>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => SessionRecord::parse(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = record.to_json()?;
        std::fs::write(&self.path, json)?;
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Holds the raw stored text in memory. Counts reads so callers can check
/// how often the store was consulted.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
    reads: AtomicUsize,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<SessionRecord>, SessionError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let raw = self
            .raw
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        match raw.as_deref() {
            Some(raw) => SessionRecord::parse(raw),
            None => Ok(None),
        }
    }

    fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let json = record.to_json()?;
        let mut raw = self
            .raw
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        *raw = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut raw = self
            .raw
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        *raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "swapseva-store-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_store_reads_nothing_before_login() {
        let dir = scratch_dir("empty");
        let store = FileSessionStore::new(&dir, "user");
        assert_eq!(store.read().unwrap(), None);
        assert!(store.clear().is_ok());
    }

    #[test]
    fn file_store_saves_reads_and_clears() {
        let dir = scratch_dir("cycle");
        let store = FileSessionStore::new(&dir, "user");
        let record = SessionRecord::new("Asha", "asha@swapseva.in");

        store.save(&record).unwrap();
        assert!(store.path().ends_with("user.json"));
        assert_eq!(store.read().unwrap(), Some(record));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_store_reports_garbage_as_malformed() {
        let dir = scratch_dir("garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let store = FileSessionStore::new(&dir, "user");
        std::fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(store.read(), Err(SessionError::Malformed(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_store_reports_unreadable_entry_as_unavailable() {
        let dir = scratch_dir("unreadable");
        let store = FileSessionStore::new(&dir, "user");
        // A directory where the file should be cannot be read as text.
        std::fs::create_dir_all(store.path()).unwrap();

        assert!(matches!(store.read(), Err(SessionError::Unavailable(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_store_reports_failed_writes_as_unavailable() {
        let dir = scratch_dir("blocked");
        let store = FileSessionStore::new(&dir, "user");
        std::fs::create_dir_all(store.path()).unwrap();

        let err = store.save(&SessionRecord::new("Asha", "asha@swapseva.in")).unwrap_err();
        assert!(matches!(err, SessionError::Unavailable(_)));
        assert!(!err.redirects());
        assert!(matches!(store.clear(), Err(SessionError::Unavailable(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn memory_store_counts_reads() {
        let store = MemorySessionStore::with_raw(r#"{"name":"Ravi"}"#);
        assert_eq!(store.reads(), 0);
        let record = store.read().unwrap().unwrap();
        assert_eq!(record.name.as_deref(), Some("Ravi"));
        assert_eq!(store.reads(), 1);

        store.clear().unwrap();
        assert_eq!(store.raw(), None);
        assert_eq!(store.read().unwrap(), None);
        assert_eq!(store.reads(), 2);
    }
}
