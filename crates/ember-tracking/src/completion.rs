//! Weighted completion score for a single day.
//!
//! Four categories of 25 points each. Every sub-item is a presence check
//! that earns its full share or nothing.

use ember_core::models::daily::{
    DailyEntry, EveningReflection, MealPlan, MorningRoutine, WellnessMetrics,
};

/// Sum of all category budgets.
pub const TOTAL_POINTS: f64 = 100.0;

/// Points earned per category, before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionBreakdown {
    pub morning_routine: f64,
    pub meal_plan: f64,
    pub wellness_metrics: f64,
    pub evening_reflection: f64,
}

impl CompletionBreakdown {
    pub fn for_entry(entry: &DailyEntry) -> Self {
        Self {
            morning_routine: morning_points(&entry.morning_routine),
            meal_plan: meal_points(&entry.meal_plan),
            wellness_metrics: wellness_points(&entry.wellness_metrics),
            evening_reflection: reflection_points(&entry.evening_reflection),
        }
    }

    pub fn earned(&self) -> f64 {
        self.morning_routine + self.meal_plan + self.wellness_metrics + self.evening_reflection
    }
}

/// Completion percentage (0–100) of an entry. Any stored
/// `completion_score` is ignored.
pub fn compute_completion_score(entry: &DailyEntry) -> u8 {
    let earned = CompletionBreakdown::for_entry(entry).earned();
    (earned / TOTAL_POINTS * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Recompute the derived score and bump `updated_at`. Call on every save.
pub fn refresh(entry: &mut DailyEntry, now: jiff::Timestamp) {
    entry.completion_score = compute_completion_score(entry);
    entry.updated_at = now;
}

fn points(condition: bool, share: f64) -> f64 {
    if condition { share } else { 0.0 }
}

fn morning_points(routine: &MorningRoutine) -> f64 {
    points(!routine.supplements.is_empty(), 5.0)
        + points(routine.water_intake > 0, 5.0)
        + points(routine.exercise, 5.0)
        + points(routine.meditation, 5.0)
        + points(routine.mood_rating > 0, 2.5)
        + points(routine.energy_level > 0, 2.5)
}

fn meal_points(plan: &MealPlan) -> f64 {
    points(plan.breakfast.is_planned(), 8.0)
        + points(plan.lunch.is_planned(), 8.0)
        + points(plan.dinner.is_planned(), 9.0)
}

fn wellness_points(metrics: &WellnessMetrics) -> f64 {
    points(metrics.sleep_quality > 0, 8.0)
        + points(metrics.sleep_hours > 0.0, 8.0)
        + points(metrics.stress_level > 0, 9.0)
}

fn reflection_points(reflection: &EveningReflection) -> f64 {
    points(!reflection.daily_wins.is_empty(), 6.0)
        + points(!reflection.challenges.is_empty(), 6.0)
        + points(!reflection.tomorrow_intentions.is_empty(), 6.0)
        + points(!reflection.gratitude.is_empty(), 7.0)
}
