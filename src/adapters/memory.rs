//! In-memory record store.
//!
//! Vec-backed [`RecordStore`] used by tests and by `--memory` sessions.
//! Ids start at 1 and are never reused.

use chrono::{DateTime, Utc};
use log::debug;

use crate::app::ports::{RecordStore, StoreError};
use crate::record::{NewRecord, Record, RecordId};

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<Record>,
    next_id: RecordId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously persisted records.
    ///
    /// Fails with [`StoreError::Corrupted`] when the highest id leaves no
    /// room for another record.
    pub fn from_records(records: Vec<Record>) -> Result<Self, StoreError> {
        let highest = records.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = highest
            .checked_add(1)
            .ok_or_else(|| StoreError::Corrupted(format!("record id {} out of range", highest)))?;
        Ok(Self { records, next_id })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn find_mut(&mut self, id: RecordId) -> Result<&mut Record, StoreError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl RecordStore for InMemoryStore {
    fn create(&mut self, attrs: NewRecord) -> Result<Record, StoreError> {
        let id = self.next_id.max(1);
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Rejected("no record ids left".into()))?;
        let record = Record::from_new(id, attrs);
        debug!("InMemoryStore: created #{}", id);
        self.records.push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.clone())
    }

    fn record_walk(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError> {
        let record = self.find_mut(id)?;
        record.last_walked_at = Some(at);
        Ok(record.clone())
    }

    fn record_feeding(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError> {
        let record = self.find_mut(id)?;
        record.last_fed_at = Some(at);
        Ok(record.clone())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}
