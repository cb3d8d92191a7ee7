//! Progress through the chosen tracking period.

use jiff::civil::Date;

use ember_core::models::daily::DailyEntry;
use ember_core::models::progress::{PeriodProgress, TrackingPeriod};

/// Whole days from the earliest entry to `today`. 0 without entries, or
/// when the earliest entry lies in the future.
pub fn days_passed(entries: &[DailyEntry], today: Date) -> u32 {
    let Some(start) = entries.iter().map(|e| e.date).min() else {
        return 0;
    };
    let days = today.since(start).map(|span| span.get_days()).unwrap_or(0);
    days.max(0) as u32
}

pub fn period_progress(
    period: TrackingPeriod,
    entries: &[DailyEntry],
    today: Date,
) -> PeriodProgress {
    let days_passed = days_passed(entries, today);
    let target_days = period.target_days();
    let percent = target_days
        .map(|target| (f64::from(days_passed) / f64::from(target) * 100.0).round() as u32);

    PeriodProgress {
        period,
        days_passed,
        target_days,
        percent,
    }
}

/// One-line description, e.g. "12/90 days completed (13%)".
pub fn describe(progress: &PeriodProgress) -> String {
    match (progress.target_days, progress.percent) {
        (Some(target), Some(percent)) => {
            format!("{}/{target} days completed ({percent}%)", progress.days_passed)
        }
        _ => format!("{} days of tracking", progress.days_passed),
    }
}
