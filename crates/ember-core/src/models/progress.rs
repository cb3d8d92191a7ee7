use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::daily::DailyEntry;

/// Completion score at or above which a day counts as a high-completion day.
pub const HIGH_COMPLETION_THRESHOLD: u8 = 80;

/// A tracked protocol habit and the per-day predicate that decides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Habit {
    /// At least one supplement marked taken.
    Supplements,
    Exercise,
    Meditation,
    /// At least one of breakfast, lunch or dinner was protocol aligned.
    ProtocolMeals,
    /// Completion score of at least [`HIGH_COMPLETION_THRESHOLD`].
    ProtocolAdherence,
}

impl Habit {
    /// Habits reported as streaks, in display order.
    pub const STREAKS: [Habit; 4] = [
        Habit::Supplements,
        Habit::Exercise,
        Habit::Meditation,
        Habit::ProtocolAdherence,
    ];

    /// Habits reported as adherence rates, in display order.
    pub const ADHERENCE: [Habit; 4] = [
        Habit::Supplements,
        Habit::Exercise,
        Habit::Meditation,
        Habit::ProtocolMeals,
    ];

    pub fn holds_for(self, entry: &DailyEntry) -> bool {
        match self {
            Habit::Supplements => entry.morning_routine.any_supplement_taken(),
            Habit::Exercise => entry.morning_routine.exercise,
            Habit::Meditation => entry.morning_routine.meditation,
            Habit::ProtocolMeals => entry.meal_plan.any_protocol_aligned(),
            Habit::ProtocolAdherence => entry.completion_score >= HIGH_COMPLETION_THRESHOLD,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Habit::Supplements => "Supplement Streak",
            Habit::Exercise => "Exercise Streak",
            Habit::Meditation => "Meditation Streak",
            Habit::ProtocolMeals => "Protocol Meal Streak",
            Habit::ProtocolAdherence => "High Completion Streak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressStreak {
    #[serde(rename = "type")]
    pub habit: Habit,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Most recent date on which the habit held.
    pub last_date: Option<Date>,
}

/// Averages over one positional bucket of seven sorted entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklyTrend {
    /// "Week 1", "Week 2", ...
    pub week: String,
    pub start_date: Date,
    pub entry_count: u32,
    pub avg_completion: u32,
    pub avg_wellness: u32,
    pub avg_energy: f64,
    pub avg_mood: f64,
    pub avg_sleep: f64,
}

/// Percentage (0–100) of tracked days on which each habit held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdherenceRates {
    pub supplements: u8,
    pub exercise: u8,
    pub meditation: u8,
    pub protocol_meals: u8,
}

impl AdherenceRates {
    pub fn get(&self, habit: Habit) -> Option<u8> {
        match habit {
            Habit::Supplements => Some(self.supplements),
            Habit::Exercise => Some(self.exercise),
            Habit::Meditation => Some(self.meditation),
            Habit::ProtocolMeals => Some(self.protocol_meals),
            Habit::ProtocolAdherence => None,
        }
    }
}

/// Fully derived analytics. Recomputed from the entries on demand; never
/// the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressAnalytics {
    pub weekly_trends: Vec<WeeklyTrend>,
    pub streaks: Vec<ProgressStreak>,
    pub adherence_rates: AdherenceRates,
}

impl ProgressAnalytics {
    pub fn streak(&self, habit: Habit) -> Option<&ProgressStreak> {
        self.streaks.iter().find(|s| s.habit == habit)
    }

    pub fn best_streak(&self) -> u32 {
        self.streaks
            .iter()
            .map(|s| s.longest_streak)
            .max()
            .unwrap_or(0)
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverviewStats {
    pub total_days: u32,
    pub avg_completion: u32,
    pub avg_wellness: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DayStatus {
    Complete,
    Partial,
    Missed,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalendarDay {
    pub date: Date,
    pub has_entry: bool,
    pub completion_score: u8,
    pub status: DayStatus,
    pub wellness_score: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TrackingPeriod {
    #[default]
    #[serde(rename = "90-day")]
    NinetyDay,
    #[serde(rename = "6-month")]
    SixMonth,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "custom")]
    Custom,
}

impl TrackingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingPeriod::NinetyDay => "90-day",
            TrackingPeriod::SixMonth => "6-month",
            TrackingPeriod::OneYear => "1-year",
            TrackingPeriod::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackingPeriod::NinetyDay => "90-Day Protocol",
            TrackingPeriod::SixMonth => "6-Month Journey",
            TrackingPeriod::OneYear => "1-Year Tracking",
            TrackingPeriod::Custom => "Custom Range",
        }
    }

    /// Length of the period in days. `None` for a custom range.
    pub fn target_days(&self) -> Option<u32> {
        match self {
            TrackingPeriod::NinetyDay => Some(90),
            TrackingPeriod::SixMonth => Some(180),
            TrackingPeriod::OneYear => Some(365),
            TrackingPeriod::Custom => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "90-day" | "90" => Some(TrackingPeriod::NinetyDay),
            "6-month" | "180" => Some(TrackingPeriod::SixMonth),
            "1-year" | "365" => Some(TrackingPeriod::OneYear),
            "custom" => Some(TrackingPeriod::Custom),
            _ => None,
        }
    }
}

/// How far the user is into their tracking period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PeriodProgress {
    pub period: TrackingPeriod,
    pub days_passed: u32,
    pub target_days: Option<u32>,
    /// Percentage of `target_days`; `None` for a custom range.
    pub percent: Option<u32>,
}
