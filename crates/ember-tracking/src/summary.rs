use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ember_core::models::daily::DailyEntry;

/// Summary block of the tracking export. Averages are left unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrackingSummary {
    pub total_days: u32,
    pub avg_completion: f64,
    pub avg_wellness: f64,
}

pub fn summarize(entries: &[DailyEntry]) -> TrackingSummary {
    if entries.is_empty() {
        return TrackingSummary::default();
    }
    let total = entries.len() as f64;
    let completion: f64 = entries.iter().map(|e| f64::from(e.completion_score)).sum();
    let wellness: f64 = entries
        .iter()
        .map(|e| f64::from(e.evening_reflection.overall_wellness))
        .sum();

    TrackingSummary {
        total_days: entries.len() as u32,
        avg_completion: completion / total,
        avg_wellness: wellness / total,
    }
}
