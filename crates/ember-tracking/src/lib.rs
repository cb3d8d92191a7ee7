//! ember-tracking
//!
//! Derived numbers over daily entries: the completion score, habit streaks,
//! adherence rates, weekly trends, calendar status and tracking-period
//! progress. Every function takes a snapshot of entries and leaves it
//! untouched.

pub mod analytics;
pub mod calendar;
pub mod completion;
pub mod error;
pub mod period;
pub mod summary;

pub use analytics::{analyze, overview};
pub use completion::compute_completion_score;
