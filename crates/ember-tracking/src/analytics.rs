//! Progress analytics over the full entry history.
//!
//! Each pass works on a date-sorted view of the caller's entries. Weekly
//! buckets are positional: every seven sorted entries form one "week", even
//! when the dates have gaps.

use jiff::civil::Date;

use ember_core::models::daily::DailyEntry;
use ember_core::models::progress::{
    AdherenceRates, Habit, OverviewStats, ProgressAnalytics, ProgressStreak, WeeklyTrend,
};

/// Entries per weekly bucket.
pub const WEEK_LENGTH: usize = 7;

/// Weekly trends, streaks and adherence rates. Empty input gives empty
/// trends and all-zero streaks and rates.
pub fn analyze(entries: &[DailyEntry]) -> ProgressAnalytics {
    let sorted = sorted_by_date(entries);
    ProgressAnalytics {
        weekly_trends: weekly_trends(&sorted),
        streaks: Habit::STREAKS
            .iter()
            .map(|habit| streak(&sorted, *habit))
            .collect(),
        adherence_rates: adherence_rates(&sorted),
    }
}

/// Headline numbers: days tracked, rounded average completion and
/// wellness, and the longest streak of any habit.
pub fn overview(entries: &[DailyEntry]) -> OverviewStats {
    if entries.is_empty() {
        return OverviewStats::default();
    }
    let sorted = sorted_by_date(entries);
    let best_streak = Habit::STREAKS
        .iter()
        .map(|habit| streak(&sorted, *habit).longest_streak)
        .max()
        .unwrap_or(0);

    OverviewStats {
        total_days: entries.len() as u32,
        avg_completion: mean(&sorted, |e| f64::from(e.completion_score)).round() as u32,
        avg_wellness: mean(&sorted, |e| f64::from(e.evening_reflection.overall_wellness)).round()
            as u32,
        best_streak,
    }
}

/// A stable, ascending-by-date view over `entries`.
pub fn sorted_by_date(entries: &[DailyEntry]) -> Vec<&DailyEntry> {
    let mut sorted: Vec<&DailyEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.date);
    sorted
}

pub fn weekly_trends(sorted: &[&DailyEntry]) -> Vec<WeeklyTrend> {
    sorted
        .chunks(WEEK_LENGTH)
        .enumerate()
        .map(|(index, week)| WeeklyTrend {
            week: format!("Week {}", index + 1),
            start_date: week[0].date,
            entry_count: week.len() as u32,
            avg_completion: mean(week, |e| f64::from(e.completion_score)).round() as u32,
            avg_wellness: mean(week, |e| f64::from(e.evening_reflection.overall_wellness)).round()
                as u32,
            avg_energy: round1(mean(week, |e| f64::from(e.morning_routine.energy_level))),
            avg_mood: round1(mean(week, |e| f64::from(e.morning_routine.mood_rating))),
            avg_sleep: round1(mean(week, |e| f64::from(e.wellness_metrics.sleep_quality))),
        })
        .collect()
}

pub fn adherence_rates(entries: &[&DailyEntry]) -> AdherenceRates {
    let rate = |habit: Habit| {
        let matching = entries.iter().filter(|e| habit.holds_for(e)).count();
        percent(matching, entries.len())
    };
    AdherenceRates {
        supplements: rate(Habit::Supplements),
        exercise: rate(Habit::Exercise),
        meditation: rate(Habit::Meditation),
        protocol_meals: rate(Habit::ProtocolMeals),
    }
}

/// Current and longest run of consecutive calendar days on which `habit`
/// held.
///
/// A missing date breaks a run the same way a non-qualifying entry does.
/// A second entry for a date already counted continues the run without
/// lengthening it. The current streak is the run ending at the most recent
/// entry, or 0 when that entry does not qualify.
pub fn streak(sorted: &[&DailyEntry], habit: Habit) -> ProgressStreak {
    let mut run: u32 = 0;
    let mut run_end: Option<Date> = None;
    let mut longest: u32 = 0;
    let mut last_date: Option<Date> = None;

    for entry in sorted {
        if !habit.holds_for(entry) {
            run = 0;
            run_end = None;
            continue;
        }

        match run_end {
            Some(end) if end == entry.date => {}
            Some(end) if end.tomorrow().ok() == Some(entry.date) => run += 1,
            _ => run = 1,
        }
        run_end = Some(entry.date);
        longest = longest.max(run);
        last_date = Some(entry.date);
    }

    ProgressStreak {
        habit,
        current_streak: run,
        longest_streak: longest,
        last_date,
    }
}

/// `round(100 * matching / total)`, 0 for an empty set.
pub fn percent(matching: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (matching as f64 / total as f64 * 100.0).round() as u8
}

fn mean<F>(entries: &[&DailyEntry], value: F) -> f64
where
    F: Fn(&DailyEntry) -> f64,
{
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|e| value(*e)).sum::<f64>() / entries.len() as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
