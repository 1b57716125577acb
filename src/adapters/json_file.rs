//! JSON file record store.
//!
//! Durable [`RecordStore`] for real sessions.  The whole file is read at
//! open time and rewritten after every mutation.
//!
//! - Missing file: starts empty; the file is created on the first write.
//! - Corrupt file: [`StoreError::Corrupted`] at open, nothing is overwritten.
//! - Writes go to a sibling temp file which is then renamed over the
//!   target, so a crash mid-write leaves the previous contents intact.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::memory::InMemoryStore;
use crate::app::ports::{RecordStore, StoreError};
use crate::record::{NewRecord, Record, RecordId};

const FORMAT_VERSION: u32 = 1;

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    dogs: Vec<Record>,
}

pub struct JsonFileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => {
                let file: StoreFile = serde_json::from_str(&text)
                    .map_err(|e| StoreError::Corrupted(format!("{}: {}", path.display(), e)))?;
                if file.version != FORMAT_VERSION {
                    return Err(StoreError::Corrupted(format!(
                        "{}: unsupported version {}",
                        path.display(),
                        file.version
                    )));
                }
                info!("JsonFileStore: loaded {} dogs from {}", file.dogs.len(), path.display());
                file.dogs
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("JsonFileStore: {} not found, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        let inner = InMemoryStore::from_records(records)
            .map_err(|e| match e {
                StoreError::Corrupted(msg) => {
                    StoreError::Corrupted(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })?;
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let file = StoreFile {
            version: FORMAT_VERSION,
            dogs: self.inner.records().to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| StoreError::Rejected(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            warn!("JsonFileStore: rename to {} failed: {}", self.path.display(), e);
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                warn!("JsonFileStore: could not remove {}: {}", tmp.display(), cleanup);
            }
            StoreError::Io(e.to_string())
        })
    }

    /// Apply `op` and persist; the in-memory change is rolled back if the write fails.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut InMemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let before = self.inner.clone();
        let out = op(&mut self.inner)?;
        if let Err(e) = self.flush() {
            self.inner = before;
            return Err(e);
        }
        Ok(out)
    }
}

impl RecordStore for JsonFileStore {
    fn create(&mut self, attrs: NewRecord) -> Result<Record, StoreError> {
        self.mutate(|store| store.create(attrs))
    }

    fn all(&self) -> Result<Vec<Record>, StoreError> {
        self.inner.all()
    }

    fn record_walk(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError> {
        self.mutate(|store| store.record_walk(id, at))
    }

    fn record_feeding(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError> {
        self.mutate(|store| store.record_feeding(id, at))
    }

    fn count(&self) -> Result<usize, StoreError> {
        self.inner.count()
    }
}
