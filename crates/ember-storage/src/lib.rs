//! ember-storage
//!
//! Persistence for daily entries, the latest assessment result and a
//! pending (not yet claimed) assessment. Two backends share the same
//! traits: an in-memory store and a directory of JSON files laid out like
//! the browser's local storage keys.

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::{AssessmentStore, DateRange, EntryRepository};
