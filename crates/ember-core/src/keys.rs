//! Storage key conventions.
//!
//! Pure string functions. The key names match what the browser client keeps
//! in local storage, so a file-backed store and an exported browser dump use
//! the same layout.

use jiff::civil::Date;

pub const ASSESSMENT_RESULT: &str = "emberAssessmentResult";

pub const DAILY_ENTRIES: &str = "emberDailyEntries";

pub const PENDING_ASSESSMENT: &str = "pendingAssessmentResults";

/// File name backing a storage key in a data directory.
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}

pub fn tracking_export(date: Date) -> String {
    format!("ember-wellness-data-{date}.json")
}

pub fn assessment_report(date: Date) -> String {
    format!("ember-method-assessment-{date}.docx")
}
