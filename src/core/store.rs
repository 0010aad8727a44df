use thiserror::Error;
use tracing::debug;

use crate::{
    show::ShowRecord,
    types::{Revision, ShowIndex},
};

/// Rejected store mutation; the store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Index was not below the current length.
    #[error("show index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: ShowIndex,
        /// Collection length at the time of the call.
        len: usize,
    },
}

/// Ordered, position-indexed collection of shows.
///
/// Order is insertion order. Removing shifts every later element one position earlier,
/// so indices captured before a removal may be stale; compare [`ShowStore::revision`]
/// to detect that.
#[derive(Debug, Default, Clone)]
pub struct ShowStore {
    records: Vec<ShowRecord>,
    revision: Revision,
}

impl ShowStore {
    /// Empty store at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` and returns its index.
    pub fn add(&mut self, record: ShowRecord) -> ShowIndex {
        let index = self.records.len();
        self.records.push(record);
        self.bump_revision();
        debug!(index, revision = self.revision, len = self.records.len(), "show added");
        index
    }

    /// Replaces the record at `index` wholesale, returning the previous one.
    pub fn replace_at(
        &mut self,
        index: ShowIndex,
        record: ShowRecord,
    ) -> Result<ShowRecord, StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        let prev = std::mem::replace(slot, record);
        self.bump_revision();
        debug!(index, revision = self.revision, "show replaced");
        Ok(prev)
    }

    /// Removes the record at `index`, shifting later records down by one.
    pub fn remove_at(&mut self, index: ShowIndex) -> Result<ShowRecord, StoreError> {
        let len = self.records.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        let removed = self.records.remove(index);
        self.bump_revision();
        debug!(index, revision = self.revision, len = self.records.len(), "show removed");
        Ok(removed)
    }

    /// Read-only view in collection order.
    pub fn list(&self) -> &[ShowRecord] {
        &self.records
    }

    /// Owned copy of every record in collection order.
    pub fn list_cloned(&self) -> Vec<ShowRecord> {
        self.records.clone()
    }

    /// Record at `index`, if present.
    pub fn get(&self, index: ShowIndex) -> Option<&ShowRecord> {
        self.records.get(index)
    }

    /// Owned copy of the record at `index`, if present.
    pub fn get_cloned(&self, index: ShowIndex) -> Option<ShowRecord> {
        self.get(index).cloned()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of successful mutations since creation.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
