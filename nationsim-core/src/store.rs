//! The record store contract and its flat-file and in-memory adapters.
//!
//! The turn engine only ever reads and writes whole records by id. No
//! atomicity is assumed across records; a single `write` either fully
//! succeeds or reports failure.

use crate::record::NationRecord;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Keyed store mapping nation id -> nation record.
///
/// `Sync` because one global turn shares the store across its worker
/// threads; implementations guard their own interior state.
pub trait RecordStore: Sync {
    /// Every nation id currently in the store.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// One record, or `None` if the id no longer resolves.
    fn read(&self, id: &str) -> Result<Option<NationRecord>, StoreError>;

    /// Replace the record under `id` wholesale.
    fn write(&self, id: &str, record: &NationRecord) -> Result<(), StoreError>;
}

/// Flat directory store: one pretty-printed `<id>.json` file per nation.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl RecordStore for FsStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<Option<NationRecord>, StoreError> {
        match fs::read(self.record_path(id)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, id: &str, record: &NationRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record)?;
        // Write to a sibling temp file and rename over the target, so a
        // failure mid-write leaves the previous record intact.
        let tmp = self.root.join(format!(".{id}.json.tmp"));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, self.record_path(id))?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral worlds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, NationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the write path.
    pub fn insert(&self, record: NationRecord) {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<String> = records.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<Option<NationRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(id).cloned())
    }

    fn write(&self, id: &str, record: &NationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert(id.to_string(), record.clone());
        Ok(())
    }
}
