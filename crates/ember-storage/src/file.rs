//! JSON-file backend.
//!
//! One file per storage key under a data directory:
//! `emberDailyEntries.json` holds an array of entries,
//! `emberAssessmentResult.json` and `pendingAssessmentResults.json` hold a
//! single object each. Writes go to a temp file that is renamed into place.
//! Entry records that fail to parse are hidden from reads but written back
//! untouched on every save.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use jiff::civil::Date;
use serde::Serialize;
use serde::de::DeserializeOwned;

use ember_core::keys;
use ember_core::models::assessment::{AssessmentResult, PendingAssessment};
use ember_core::models::daily::DailyEntry;

use crate::error::StorageError;
use crate::repository::{AssessmentStore, DateRange, EntryRepository, prepare_upsert};

/// Contents of the entries file.
#[derive(Debug, Default)]
struct EntriesFile {
    entries: Vec<DailyEntry>,
    /// Records that did not parse, kept verbatim so a rewrite preserves them.
    unreadable: Vec<serde_json::Value>,
}

#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    /// Serializes read-modify-write cycles on the entries file.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            action: "create",
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "opened data directory");
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(keys::file_name(key))
    }

    /// All stored records in file order. Records that fail to parse are
    /// kept aside as raw JSON with a warning.
    fn read_entries(&self) -> Result<EntriesFile, StorageError> {
        let path = self.path_for(keys::DAILY_ENTRIES);
        let Some(contents) = read_optional(&path)? else {
            return Ok(EntriesFile::default());
        };

        let raw: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let mut file = EntriesFile::default();
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<DailyEntry>(value.clone()) {
                Ok(entry) => file.entries.push(entry),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        index,
                        error = %e,
                        "skipping unreadable daily entry"
                    );
                    file.unreadable.push(value);
                }
            }
        }
        tracing::debug!(
            count = file.entries.len(),
            unreadable = file.unreadable.len(),
            "loaded daily entries"
        );
        Ok(file)
    }

    /// Rewrite the entries file: parsed entries by date, then the unreadable
    /// records exactly as they were read.
    fn write_entries(&self, file: &EntriesFile) -> Result<(), StorageError> {
        let mut records = file
            .entries
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        records.extend(file.unreadable.iter().cloned());
        write_json(&self.path_for(keys::DAILY_ENTRIES), &records)
    }

    /// A single-object key. An unreadable file reads as absent.
    fn read_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        let Some(contents) = read_optional(&path)? else {
            return Ok(None);
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable record");
                Ok(None)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "record removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                action: "remove",
                path,
                source,
            }),
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, ()>, StorageError> {
        self.write_lock.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl EntryRepository for JsonFileStore {
    fn get(&self, date: Date) -> Result<Option<DailyEntry>, StorageError> {
        Ok(self
            .read_entries()?
            .entries
            .into_iter()
            .find(|e| e.date == date))
    }

    fn upsert(&self, entry: DailyEntry) -> Result<DailyEntry, StorageError> {
        let _guard = self.locked()?;
        let mut file = self.read_entries()?;

        let existing = file.entries.iter().position(|e| e.date == entry.date);
        let stored = prepare_upsert(
            entry,
            existing.map(|i| &file.entries[i]),
            jiff::Timestamp::now(),
        );
        file.entries.retain(|e| e.date != stored.date);
        file.entries.push(stored.clone());
        file.entries.sort_by_key(|e| e.date);

        self.write_entries(&file)?;
        tracing::info!(
            date = %stored.date,
            completion = stored.completion_score,
            replaced = existing.is_some(),
            kept_unreadable = file.unreadable.len(),
            "daily entry saved"
        );
        Ok(stored)
    }

    fn list(&self, range: DateRange) -> Result<Vec<DailyEntry>, StorageError> {
        let mut entries: Vec<DailyEntry> = self
            .read_entries()?
            .entries
            .into_iter()
            .filter(|e| range.contains(e.date))
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Removes the entries file, unreadable records included.
    fn clear(&self) -> Result<usize, StorageError> {
        let _guard = self.locked()?;
        let file = self.read_entries()?;
        let removed = file.entries.len() + file.unreadable.len();
        self.remove(keys::DAILY_ENTRIES)?;
        tracing::info!(removed, "daily entries cleared");
        Ok(removed)
    }
}

impl AssessmentStore for JsonFileStore {
    fn load_result(&self) -> Result<Option<AssessmentResult>, StorageError> {
        self.read_object(keys::ASSESSMENT_RESULT)
    }

    fn save_result(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        write_json(&self.path_for(keys::ASSESSMENT_RESULT), result)?;
        tracing::info!(profile = %result.primary_profile, "assessment result saved");
        Ok(())
    }

    fn clear_result(&self) -> Result<(), StorageError> {
        self.remove(keys::ASSESSMENT_RESULT)
    }

    fn load_pending(&self) -> Result<Option<PendingAssessment>, StorageError> {
        self.read_object(keys::PENDING_ASSESSMENT)
    }

    fn save_pending(&self, pending: &PendingAssessment) -> Result<(), StorageError> {
        write_json(&self.path_for(keys::PENDING_ASSESSMENT), pending)?;
        tracing::info!(answers = pending.answers.len(), "pending assessment saved");
        Ok(())
    }

    fn clear_pending(&self) -> Result<(), StorageError> {
        self.remove(keys::PENDING_ASSESSMENT)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pretty-print `value` to a sibling temp file, then rename over `path`.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    std::fs::write(&tmp_path, json.as_bytes()).map_err(|source| StorageError::Io {
        action: "write",
        path: tmp_path.clone(),
        source,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|source| StorageError::Io {
        action: "rename",
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote json");
    Ok(())
}
