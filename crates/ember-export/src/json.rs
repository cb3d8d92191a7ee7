use serde::{Deserialize, Serialize};

use ember_core::models::daily::DailyEntry;
use ember_core::models::progress::TrackingPeriod;
use ember_tracking::summary::{TrackingSummary, summarize};

use crate::error::ExportError;

/// Full dump of the tracking data, written as
/// `ember-wellness-data-YYYY-MM-DD.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingExport {
    pub tracking_period: TrackingPeriod,
    pub entries: Vec<DailyEntry>,
    pub export_date: jiff::Timestamp,
    pub summary: TrackingSummary,
}

impl TrackingExport {
    pub fn new(
        tracking_period: TrackingPeriod,
        entries: Vec<DailyEntry>,
        export_date: jiff::Timestamp,
    ) -> Self {
        let summary = summarize(&entries);
        Self {
            tracking_period,
            entries,
            export_date,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
