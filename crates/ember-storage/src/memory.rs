use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use jiff::civil::Date;

use ember_core::models::assessment::{AssessmentResult, PendingAssessment};
use ember_core::models::daily::DailyEntry;

use crate::error::StorageError;
use crate::repository::{AssessmentStore, DateRange, EntryRepository, prepare_upsert};

/// Process-local store, used by tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<Date, DailyEntry>>,
    result: Mutex<Option<AssessmentResult>>,
    pending: Mutex<Option<PendingAssessment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex.lock().map_err(|_| StorageError::Poisoned)
}

impl EntryRepository for MemoryStore {
    fn get(&self, date: Date) -> Result<Option<DailyEntry>, StorageError> {
        Ok(lock(&self.entries)?.get(&date).cloned())
    }

    fn upsert(&self, entry: DailyEntry) -> Result<DailyEntry, StorageError> {
        let mut guard = lock(&self.entries)?;
        let date = entry.date;
        let stored = prepare_upsert(entry, guard.get(&date), jiff::Timestamp::now());
        guard.insert(stored.date, stored.clone());
        Ok(stored)
    }

    fn list(&self, range: DateRange) -> Result<Vec<DailyEntry>, StorageError> {
        Ok(lock(&self.entries)?
            .values()
            .filter(|entry| range.contains(entry.date))
            .cloned()
            .collect())
    }

    fn clear(&self) -> Result<usize, StorageError> {
        let mut guard = lock(&self.entries)?;
        let removed = guard.len();
        guard.clear();
        Ok(removed)
    }
}

impl AssessmentStore for MemoryStore {
    fn load_result(&self) -> Result<Option<AssessmentResult>, StorageError> {
        Ok(lock(&self.result)?.clone())
    }

    fn save_result(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        *lock(&self.result)? = Some(result.clone());
        Ok(())
    }

    fn clear_result(&self) -> Result<(), StorageError> {
        *lock(&self.result)? = None;
        Ok(())
    }

    fn load_pending(&self) -> Result<Option<PendingAssessment>, StorageError> {
        Ok(lock(&self.pending)?.clone())
    }

    fn save_pending(&self, pending: &PendingAssessment) -> Result<(), StorageError> {
        *lock(&self.pending)? = Some(pending.clone());
        Ok(())
    }

    fn clear_pending(&self) -> Result<(), StorageError> {
        *lock(&self.pending)? = None;
        Ok(())
    }
}
