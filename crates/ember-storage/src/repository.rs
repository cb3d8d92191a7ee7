use jiff::civil::Date;

use ember_core::models::assessment::{AssessmentResult, PendingAssessment};
use ember_core::models::daily::DailyEntry;

use crate::error::StorageError;

/// Inclusive date bounds for [`EntryRepository::list`]. A missing bound is
/// open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(from: Date, to: Date) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Daily entries keyed by date. At most one entry is kept per date.
pub trait EntryRepository: Send + Sync {
    fn get(&self, date: Date) -> Result<Option<DailyEntry>, StorageError>;

    /// Insert or replace the entry for `entry.date`.
    ///
    /// The completion score is recomputed and `updated_at` is stamped
    /// before the write. Replacing keeps the stored entry's `id` and
    /// `created_at`. Returns the entry as stored.
    fn upsert(&self, entry: DailyEntry) -> Result<DailyEntry, StorageError>;

    /// Entries within `range`, ascending by date.
    fn list(&self, range: DateRange) -> Result<Vec<DailyEntry>, StorageError>;

    /// Remove every entry. Returns how many were removed.
    fn clear(&self) -> Result<usize, StorageError>;
}

/// The latest assessment result and a pending result saved before the
/// user had an account.
pub trait AssessmentStore: Send + Sync {
    fn load_result(&self) -> Result<Option<AssessmentResult>, StorageError>;
    fn save_result(&self, result: &AssessmentResult) -> Result<(), StorageError>;
    fn clear_result(&self) -> Result<(), StorageError>;

    fn load_pending(&self) -> Result<Option<PendingAssessment>, StorageError>;
    fn save_pending(&self, pending: &PendingAssessment) -> Result<(), StorageError>;
    fn clear_pending(&self) -> Result<(), StorageError>;

    /// Promote the pending assessment to the saved result and clear it.
    fn claim_pending(&self) -> Result<Option<AssessmentResult>, StorageError> {
        let Some(pending) = self.load_pending()? else {
            return Ok(None);
        };
        self.save_result(&pending.result)?;
        self.clear_pending()?;
        Ok(Some(pending.result))
    }
}

/// Shared upsert rule: keep identity from the stored entry, recompute the
/// derived score, stamp the update time.
pub(crate) fn prepare_upsert(
    mut entry: DailyEntry,
    existing: Option<&DailyEntry>,
    now: jiff::Timestamp,
) -> DailyEntry {
    if let Some(existing) = existing {
        entry.id = existing.id;
        entry.created_at = existing.created_at;
    }
    ember_tracking::completion::refresh(&mut entry, now);
    entry
}
