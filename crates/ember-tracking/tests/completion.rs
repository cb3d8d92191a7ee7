use ember_core::models::daily::{
    DailyEntry, EveningReflection, Meal, MealPlan, MorningRoutine, SupplementIntake,
    SupplementTime, WellnessMetrics,
};
use ember_tracking::completion::{self, CompletionBreakdown};
use ember_tracking::compute_completion_score;
use jiff::civil::date;

fn now() -> jiff::Timestamp {
    "2025-03-14T09:30:00Z".parse().expect("timestamp")
}

fn blank() -> DailyEntry {
    DailyEntry {
        morning_routine: MorningRoutine::default(),
        meal_plan: MealPlan::default(),
        wellness_metrics: WellnessMetrics::default(),
        evening_reflection: EveningReflection::default(),
        ..DailyEntry::new(date(2025, 3, 14), now())
    }
}

fn ember_capsule(taken: bool) -> SupplementIntake {
    SupplementIntake {
        name: "EMBER".to_string(),
        taken,
        dosage: "2 capsules".to_string(),
        time: SupplementTime::Morning,
    }
}

fn full_day() -> DailyEntry {
    blank()
        .with_morning_routine(
            MorningRoutine::seeded()
                .with_supplement(ember_capsule(true))
                .with_water_intake(6)
                .with_exercise("walk", 30)
                .with_meditation(10),
        )
        .with_meal_plan(
            MealPlan::seeded()
                .with_breakfast(Meal::planned("eggs and greens", true))
                .with_lunch(Meal::planned("salmon salad", true))
                .with_dinner(Meal::planned("chicken and squash", false)),
        )
        .with_wellness_metrics(WellnessMetrics::seeded().with_sleep(7, 7.5))
        .with_evening_reflection(
            EveningReflection::seeded()
                .with_win("walked before work")
                .with_challenge("afternoon slump")
                .with_intention("prep lunch")
                .with_gratitude("sunshine"),
        )
}

#[test]
fn blank_entry_scores_zero() {
    assert_eq!(compute_completion_score(&blank()), 0);
}

#[test]
fn full_entry_scores_hundred() {
    let entry = full_day();
    let breakdown = CompletionBreakdown::for_entry(&entry);

    assert_eq!(breakdown.morning_routine, 25.0);
    assert_eq!(breakdown.meal_plan, 25.0);
    assert_eq!(breakdown.wellness_metrics, 25.0);
    assert_eq!(breakdown.evening_reflection, 25.0);
    assert_eq!(compute_completion_score(&entry), 100);
}

#[test]
fn seeded_entry_earns_ratings_and_sleep_points() {
    // mood 2.5 + energy 2.5 + sleep quality 8 + sleep hours 8 + stress 9
    let entry = DailyEntry::new(date(2025, 3, 14), now());
    assert_eq!(compute_completion_score(&entry), 30);
}

#[test]
fn half_points_round_up() {
    let entry = blank().with_morning_routine(MorningRoutine::default().with_mood(4));
    assert_eq!(compute_completion_score(&entry), 3);
}

#[test]
fn supplements_count_when_listed_even_if_not_taken() {
    let routine = MorningRoutine::default().with_supplement(ember_capsule(false));
    let entry = blank().with_morning_routine(routine);
    assert_eq!(compute_completion_score(&entry), 5);
}

#[test]
fn score_is_idempotent_and_bounded() {
    for entry in [blank(), full_day(), DailyEntry::new(date(2025, 1, 1), now())] {
        let first = compute_completion_score(&entry);
        let second = compute_completion_score(&entry);
        assert_eq!(first, second);
        assert!(first <= 100);
    }
}

#[test]
fn adding_a_supplement_never_lowers_the_score() {
    let before = DailyEntry::new(date(2025, 3, 14), now());
    let after = before.clone().with_morning_routine(
        before
            .morning_routine
            .clone()
            .with_supplement(ember_capsule(true)),
    );

    assert!(compute_completion_score(&after) >= compute_completion_score(&before));
    assert_eq!(compute_completion_score(&after), 35);
}

#[test]
fn stored_score_is_ignored() {
    let mut entry = blank();
    entry.completion_score = 97;
    assert_eq!(compute_completion_score(&entry), 0);
}

#[test]
fn refresh_recomputes_and_stamps() {
    let mut entry = full_day();
    entry.completion_score = 12;
    let later: jiff::Timestamp = "2025-03-14T21:00:00Z".parse().expect("timestamp");

    completion::refresh(&mut entry, later);

    assert_eq!(entry.completion_score, 100);
    assert_eq!(entry.updated_at, later);
    assert_eq!(entry.created_at, now());
}
