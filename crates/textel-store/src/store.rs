//! Canvas stores: in-memory and JSON-file backed.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::CanvasRecord;

/// Keyed storage for per-owner canvas records.
///
/// One logical session per owner key at a time: callers are responsible for
/// serializing read-modify-write cycles against the same key and must not
/// hold a restored canvas across an unbounded external wait.
pub trait CanvasStore {
    /// Load the record for an owner, if one exists.
    fn load(&self, owner: &str) -> Result<Option<CanvasRecord>, StoreError>;

    /// Insert or replace the record under its owner key.
    fn save(&mut self, record: &CanvasRecord) -> Result<(), StoreError>;

    /// Remove an owner's record. Returns whether one existed.
    fn delete(&mut self, owner: &str) -> Result<bool, StoreError>;
}

/// HashMap-backed store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, CanvasRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CanvasStore for MemoryStore {
    fn load(&self, owner: &str) -> Result<Option<CanvasRecord>, StoreError> {
        Ok(self.records.get(owner).cloned())
    }

    fn save(&mut self, record: &CanvasRecord) -> Result<(), StoreError> {
        self.records.insert(record.owner.clone(), record.clone());
        Ok(())
    }

    fn delete(&mut self, owner: &str) -> Result<bool, StoreError> {
        Ok(self.records.remove(owner).is_some())
    }
}

/// Store persisting all records as one JSON document on disk.
///
/// Every operation reads the document fresh and writes it back whole, so
/// concurrent writers to the same file are the caller's problem — the same
/// contract the in-process stores place on read-modify-write cycles.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file; the file is created on the
    /// first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, CanvasRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, records: &HashMap<String, CanvasRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl CanvasStore for JsonFileStore {
    fn load(&self, owner: &str) -> Result<Option<CanvasRecord>, StoreError> {
        Ok(self.read_all()?.remove(owner))
    }

    fn save(&mut self, record: &CanvasRecord) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        records.insert(record.owner.clone(), record.clone());
        self.write_all(&records)
    }

    fn delete(&mut self, owner: &str) -> Result<bool, StoreError> {
        let mut records = self.read_all()?;
        let existed = records.remove(owner).is_some();
        if existed {
            self.write_all(&records)?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_save_load() {
        let mut store = MemoryStore::new();
        let record = CanvasRecord::fresh("user-1", 2, 2, ".");
        store.save(&record).unwrap();

        let loaded = store.load("user-1").unwrap().unwrap();
        assert_eq!(loaded, record);
        assert!(store.load("user-2").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_replaces() {
        let mut store = MemoryStore::new();
        store.save(&CanvasRecord::fresh("user-1", 2, 2, ".")).unwrap();
        store.save(&CanvasRecord::fresh("user-1", 3, 3, "#")).unwrap();

        assert_eq!(store.len(), 1);
        let loaded = store.load("user-1").unwrap().unwrap();
        assert_eq!(loaded.width, 3);
        assert_eq!(loaded.background, "#");
    }

    #[test]
    fn test_memory_store_delete() {
        let mut store = MemoryStore::new();
        store.save(&CanvasRecord::fresh("user-1", 2, 2, ".")).unwrap();

        assert!(store.delete("user-1").unwrap());
        assert!(!store.delete("user-1").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_read_modify_write_cycle() {
        let mut store = MemoryStore::new();
        store.save(&CanvasRecord::fresh("user-1", 3, 2, ".")).unwrap();

        // Load, mutate, write back: the calling layer's contract.
        let mut record = store.load("user-1").unwrap().unwrap();
        let mut canvas = record.to_canvas().unwrap();
        canvas.rect("#", 1, 0, 1, 1, 0, " ");
        record.absorb(&canvas);
        store.save(&record).unwrap();

        let reloaded = store.load("user-1").unwrap().unwrap();
        assert_eq!(reloaded.to_canvas().unwrap().render(), ".#.\n...");
    }
}
