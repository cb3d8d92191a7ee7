//! Per-day status for calendar views.

use std::collections::BTreeMap;

use jiff::ToSpan;
use jiff::civil::Date;

use ember_core::models::daily::DailyEntry;
use ember_core::models::progress::{CalendarDay, DayStatus, HIGH_COMPLETION_THRESHOLD};

use crate::error::TrackingError;

/// Completion score at or above which a day counts as partially done.
pub const PARTIAL_COMPLETION_THRESHOLD: u8 = 40;

/// Days shown in a month grid: six full weeks.
pub const MONTH_GRID_DAYS: usize = 42;

pub fn day_status(entry: Option<&DailyEntry>, date: Date, today: Date) -> DayStatus {
    if date > today {
        return DayStatus::Future;
    }
    match entry {
        Some(e) if e.completion_score >= HIGH_COMPLETION_THRESHOLD => DayStatus::Complete,
        Some(e) if e.completion_score >= PARTIAL_COMPLETION_THRESHOLD => DayStatus::Partial,
        _ => DayStatus::Missed,
    }
}

pub fn calendar_day(entry: Option<&DailyEntry>, date: Date, today: Date) -> CalendarDay {
    CalendarDay {
        date,
        has_entry: entry.is_some(),
        completion_score: entry.map(|e| e.completion_score).unwrap_or(0),
        status: day_status(entry, date, today),
        wellness_score: entry
            .map(|e| e.evening_reflection.overall_wellness)
            .unwrap_or(0),
    }
}

/// One [`CalendarDay`] for every date in `from..=to`. Empty when `from` is
/// after `to`.
pub fn calendar_range(
    entries: &[DailyEntry],
    from: Date,
    to: Date,
    today: Date,
) -> Vec<CalendarDay> {
    let by_date = index_by_date(entries);
    from.series(1.day())
        .take_while(|date| *date <= to)
        .map(|date| calendar_day(by_date.get(&date).copied(), date, today))
        .collect()
}

/// Six-week grid for a month, starting on the Sunday on or before the 1st.
pub fn month_grid(
    entries: &[DailyEntry],
    year: i16,
    month: i8,
    today: Date,
) -> Result<Vec<CalendarDay>, TrackingError> {
    let first = Date::new(year, month, 1)
        .map_err(|source| TrackingError::InvalidMonth { year, month, source })?;
    let start = week_start(first)?;
    let end = start.checked_add((MONTH_GRID_DAYS as i64 - 1).days())?;
    Ok(calendar_range(entries, start, end, today))
}

/// The Sunday-to-Saturday week containing `date`.
pub fn week_of(
    entries: &[DailyEntry],
    date: Date,
    today: Date,
) -> Result<Vec<CalendarDay>, TrackingError> {
    let start = week_start(date)?;
    let end = start.checked_add(6.days())?;
    Ok(calendar_range(entries, start, end, today))
}

fn week_start(date: Date) -> Result<Date, TrackingError> {
    let offset = i64::from(date.weekday().to_sunday_zero_offset());
    Ok(date.checked_sub(offset.days())?)
}

/// First entry per date wins.
fn index_by_date(entries: &[DailyEntry]) -> BTreeMap<Date, &DailyEntry> {
    let mut by_date = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_insert(entry);
    }
    by_date
}
