use ember_core::keys;
use ember_core::models::assessment::{
    AssessmentResponse, AssessmentResult, ImpactLevel, SectionScore,
};
use ember_core::models::daily::{
    DailyEntry, Meal, MealPlan, MorningRoutine, SupplementIntake, SupplementTime,
};
use ember_core::models::parse_date;
use ember_core::models::progress::{Habit, TrackingPeriod};

fn sample_result() -> AssessmentResult {
    AssessmentResult {
        section_scores: vec![
            SectionScore {
                section_id: "hormonal-chaos".to_string(),
                title: "Hormonal Chaos".to_string(),
                score: 12,
                max_score: 24,
                impact_level: ImpactLevel::Moderate,
            },
            SectionScore {
                section_id: "sleep-disruption".to_string(),
                title: "Sleep Disruption".to_string(),
                score: 20,
                max_score: 24,
                impact_level: ImpactLevel::Major,
            },
        ],
        primary_profile: "Profile 6: Sleep-Deprived Zombie".to_string(),
        completed_at: "2025-03-14T09:30:00Z".parse().expect("valid timestamp"),
    }
}

#[test]
fn assessment_result_survives_json_round_trip() {
    let result = sample_result();

    let json = result.to_json().expect("serializes");
    let restored = AssessmentResult::from_json(&json).expect("deserializes");

    assert_eq!(restored.section_scores, result.section_scores);
    assert_eq!(restored.primary_profile, result.primary_profile);
    assert_eq!(restored.completed_at, result.completed_at);
}

#[test]
fn assessment_result_uses_camel_case_wire_names() {
    let value = serde_json::to_value(sample_result()).expect("serializes");

    assert!(value.get("sectionScores").is_some());
    assert_eq!(value["primaryProfile"], "Profile 6: Sleep-Deprived Zombie");
    assert_eq!(value["completedAt"], "2025-03-14T09:30:00Z");
    assert_eq!(value["sectionScores"][1]["impactLevel"], "major");
    assert_eq!(value["sectionScores"][1]["maxScore"], 24);
}

#[test]
fn browser_stored_result_is_readable() {
    let json = r#"{
        "sectionScores": [
            {"sectionId": "adrenal-exhaustion", "title": "Adrenal Exhaustion", "score": 9, "maxScore": 24, "impactLevel": "moderate"}
        ],
        "primaryProfile": "Profile 1: Depleted High Achiever",
        "completedAt": "2024-11-02T18:04:11.250Z"
    }"#;

    let result = AssessmentResult::from_json(json).expect("deserializes");
    let section = result.section("adrenal-exhaustion").expect("section present");
    assert_eq!(section.impact_level, ImpactLevel::Moderate);
    assert!((section.ratio() - 0.375).abs() < 1e-9);
}

#[test]
fn missing_answers_read_as_zero() {
    let responses = AssessmentResponse::new().with("hc-1", 3);

    assert_eq!(responses.answer("hc-1"), 3);
    assert_eq!(responses.answer("hc-2"), 0);
    assert_eq!(responses.len(), 1);
}

#[test]
fn sparse_daily_entry_deserializes_with_zeroed_sub_records() {
    let json = r#"{
        "id": "5f0c6a52-0c2e-4c1b-9d6c-1f7f6f0b1a11",
        "date": "2025-01-06",
        "morningRoutine": {"exercise": true},
        "completionScore": 99,
        "created_at": "2025-01-06T07:00:00Z",
        "updated_at": "2025-01-06T21:00:00Z"
    }"#;

    let entry: DailyEntry = serde_json::from_str(json).expect("deserializes");
    assert!(entry.morning_routine.exercise);
    assert_eq!(entry.morning_routine.mood_rating, 0);
    assert!(entry.meal_plan.breakfast.planned.is_empty());
    assert_eq!(entry.evening_reflection.overall_wellness, 0);
}

#[test]
fn seeded_entry_matches_planner_defaults() {
    let date = parse_date("2025-02-01").expect("valid");
    let entry = DailyEntry::new(date, jiff::Timestamp::UNIX_EPOCH);

    assert_eq!(entry.date, date);
    assert_eq!(entry.morning_routine.mood_rating, 5);
    assert_eq!(entry.morning_routine.energy_level, 5);
    assert_eq!(entry.wellness_metrics.sleep_hours, 8.0);
    assert_eq!(entry.evening_reflection.overall_wellness, 50);
    assert_eq!(entry.meal_plan.lunch.hunger_before, 5);
    assert_eq!(entry.completion_score, 0);
}

#[test]
fn habit_predicates_read_the_right_fields() {
    let date = parse_date("2025-02-01").expect("valid");
    let mut entry = DailyEntry::new(date, jiff::Timestamp::UNIX_EPOCH)
        .with_morning_routine(MorningRoutine::seeded().with_supplement(SupplementIntake {
            name: "EMBER".to_string(),
            taken: false,
            dosage: "2 capsules".to_string(),
            time: SupplementTime::Morning,
        }))
        .with_meal_plan(MealPlan::seeded().with_dinner(Meal::planned("Salmon", true)));

    assert!(!Habit::Supplements.holds_for(&entry));
    assert!(Habit::ProtocolMeals.holds_for(&entry));
    assert!(!Habit::Exercise.holds_for(&entry));

    entry.completion_score = 80;
    assert!(Habit::ProtocolAdherence.holds_for(&entry));
    entry.completion_score = 79;
    assert!(!Habit::ProtocolAdherence.holds_for(&entry));
}

#[test]
fn tracking_period_wire_names() {
    assert_eq!(
        serde_json::to_string(&TrackingPeriod::SixMonth).expect("serializes"),
        "\"6-month\""
    );
    assert_eq!(TrackingPeriod::parse("90-day"), Some(TrackingPeriod::NinetyDay));
    assert_eq!(TrackingPeriod::parse("weekly"), None);
    assert_eq!(TrackingPeriod::Custom.target_days(), None);
    assert_eq!(TrackingPeriod::OneYear.target_days(), Some(365));
}

#[test]
fn invalid_date_is_reported() {
    assert!(parse_date("2025-13-01").is_err());
    assert!(parse_date("yesterday").is_err());
}

#[test]
fn storage_keys_follow_browser_layout() {
    assert_eq!(keys::file_name(keys::DAILY_ENTRIES), "emberDailyEntries.json");
    let date = parse_date("2025-04-09").expect("valid");
    assert_eq!(keys::tracking_export(date), "ember-wellness-data-2025-04-09.json");
    assert_eq!(keys::assessment_report(date), "ember-method-assessment-2025-04-09.docx");
}
