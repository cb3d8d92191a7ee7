use ember_assessment::{EmberAssessment, Questionnaire};
use ember_core::keys;
use ember_core::models::assessment::{AssessmentResponse, PendingAssessment};
use ember_core::models::daily::{DailyEntry, EveningReflection, MorningRoutine};
use ember_storage::{AssessmentStore, DateRange, EntryRepository, JsonFileStore, StorageError};
use jiff::civil::date;

fn then() -> jiff::Timestamp {
    "2025-03-01T08:00:00Z".parse().expect("timestamp")
}

fn store() -> (tempfile::TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::open(dir.path().join("data")).expect("open store");
    (dir, store)
}

#[test]
fn empty_directory_has_no_data() {
    let (_dir, store) = store();

    assert!(store.list(DateRange::all()).expect("list").is_empty());
    assert!(store.get(date(2025, 3, 1)).expect("get").is_none());
    assert!(store.load_result().expect("result").is_none());
    assert!(store.load_pending().expect("pending").is_none());
}

#[test]
fn upsert_recomputes_stale_completion_score() {
    let (_dir, store) = store();
    let mut entry = DailyEntry::new(date(2025, 3, 1), then());
    entry.completion_score = 99;

    let stored = store.upsert(entry).expect("upsert");

    assert_eq!(stored.completion_score, 30);
    assert!(stored.updated_at > then());
    let reloaded = store.get(date(2025, 3, 1)).expect("get").expect("entry");
    assert_eq!(reloaded.completion_score, 30);
}

#[test]
fn upsert_replaces_same_date_and_keeps_identity() {
    let (_dir, store) = store();
    let first = store
        .upsert(DailyEntry::new(date(2025, 3, 1), then()))
        .expect("first save");

    let replacement = DailyEntry::new(date(2025, 3, 1), jiff::Timestamp::now())
        .with_evening_reflection(EveningReflection::seeded().with_win("slept well"));
    let second = store.upsert(replacement).expect("second save");

    let all = store.list(DateRange::all()).expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(all[0].evening_reflection.daily_wins, vec!["slept well".to_string()]);
    assert_eq!(all[0].completion_score, 36);
}

#[test]
fn list_is_sorted_and_filtered() {
    let (_dir, store) = store();
    for day in [5, 1, 3, 9] {
        store
            .upsert(DailyEntry::new(date(2025, 3, day), then()))
            .expect("upsert");
    }

    let all: Vec<i8> = store
        .list(DateRange::all())
        .expect("list")
        .iter()
        .map(|e| e.date.day())
        .collect();
    assert_eq!(all, vec![1, 3, 5, 9]);

    let window = store
        .list(DateRange::between(date(2025, 3, 3), date(2025, 3, 5)))
        .expect("list");
    assert_eq!(window.len(), 2);

    let open_ended = store
        .list(DateRange {
            from: Some(date(2025, 3, 4)),
            to: None,
        })
        .expect("list");
    assert_eq!(open_ended.len(), 2);
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let store = JsonFileStore::open(dir.path()).expect("open");
        store
            .upsert(DailyEntry::new(date(2025, 3, 1), then()).with_morning_routine(
                MorningRoutine::seeded().with_exercise("yoga", 20),
            ))
            .expect("upsert");
    }

    let store = JsonFileStore::open(dir.path()).expect("reopen");
    let entry = store.get(date(2025, 3, 1)).expect("get").expect("entry");
    assert!(entry.morning_routine.exercise);
    assert!(dir.path().join(keys::file_name(keys::DAILY_ENTRIES)).exists());
    assert!(!dir.path().join("emberDailyEntries.json.tmp").exists());
}

#[test]
fn unreadable_entry_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(keys::file_name(keys::DAILY_ENTRIES));
    std::fs::write(
        &path,
        r#"[
            {"id": "8c1f5a52-3e0a-4f39-9d0e-4cbd3a7c9a10", "date": "2025-03-02",
             "created_at": "2025-03-02T07:00:00Z", "updated_at": "2025-03-02T07:00:00Z"},
            {"id": "not-a-uuid", "date": "yesterday"}
        ]"#,
    )
    .expect("write fixture");

    let store = JsonFileStore::open(dir.path()).expect("open");
    let entries = store.list(DateRange::all()).expect("list");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, date(2025, 3, 2));
}

#[test]
fn upsert_keeps_unreadable_records_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(keys::file_name(keys::DAILY_ENTRIES));
    std::fs::write(
        &path,
        r#"[
            {"id": "8c1f5a52-3e0a-4f39-9d0e-4cbd3a7c9a10", "date": "2025-03-02",
             "completionScore": 300,
             "created_at": "2025-03-02T07:00:00Z", "updated_at": "2025-03-02T07:00:00Z"}
        ]"#,
    )
    .expect("write fixture");
    let store = JsonFileStore::open(dir.path()).expect("open");

    store
        .upsert(DailyEntry::new(date(2025, 3, 3), then()))
        .expect("upsert");

    let on_disk: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json array");
    assert_eq!(on_disk.len(), 2);
    let kept = on_disk
        .iter()
        .find(|record| record["date"] == "2025-03-02")
        .expect("unreadable record still on disk");
    assert_eq!(kept["completionScore"], 300);
    assert_eq!(kept["id"], "8c1f5a52-3e0a-4f39-9d0e-4cbd3a7c9a10");

    let listed = store.list(DateRange::all()).expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, date(2025, 3, 3));
}

#[test]
fn non_array_entries_file_is_corrupt() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("emberDailyEntries.json"), "{}").expect("write fixture");

    let store = JsonFileStore::open(dir.path()).expect("open");

    assert!(matches!(
        store.list(DateRange::all()),
        Err(StorageError::Corrupt { .. })
    ));
}

#[test]
fn clear_removes_all_entries() {
    let (_dir, store) = store();
    store
        .upsert(DailyEntry::new(date(2025, 3, 1), then()))
        .expect("upsert");
    store
        .upsert(DailyEntry::new(date(2025, 3, 2), then()))
        .expect("upsert");

    assert_eq!(store.clear().expect("clear"), 2);
    assert!(store.list(DateRange::all()).expect("list").is_empty());
    assert_eq!(store.clear().expect("clear again"), 0);
}

#[test]
fn assessment_result_round_trips() {
    let (_dir, store) = store();
    let result = EmberAssessment.score(&AssessmentResponse::new().with("sd-1", 3));

    store.save_result(&result).expect("save");
    let loaded = store.load_result().expect("load").expect("result");

    assert_eq!(loaded, result);

    store.clear_result().expect("clear");
    assert!(store.load_result().expect("load").is_none());
}

#[test]
fn unreadable_result_reads_as_absent() {
    let (_dir, store) = store();
    std::fs::write(
        store.dir().join(keys::file_name(keys::ASSESSMENT_RESULT)),
        "{ not json",
    )
    .expect("write fixture");

    assert!(store.load_result().expect("load").is_none());
}

#[test]
fn pending_assessment_can_be_claimed() {
    let (_dir, store) = store();
    let answers = AssessmentResponse::new().with("bsc-1", 2).with("bsc-2", 3);
    let result = EmberAssessment.score(&answers);
    let pending = PendingAssessment {
        answers,
        timestamp: result.completed_at,
        result: result.clone(),
    };

    store.save_pending(&pending).expect("save pending");
    assert_eq!(store.load_pending().expect("load").expect("pending"), pending);

    let claimed = store.claim_pending().expect("claim").expect("claimed result");

    assert_eq!(claimed, result);
    assert!(store.load_pending().expect("load").is_none());
    assert_eq!(store.load_result().expect("load").expect("result"), result);
    assert!(store.claim_pending().expect("claim").is_none());
}
