//! ember-core
//!
//! Pure domain types and storage key conventions. No I/O; this is the
//! shared vocabulary of the Ember assessment and tracking crates.

pub mod error;
pub mod keys;
pub mod models;
