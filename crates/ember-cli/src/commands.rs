//! Command implementations behind the `ember` binary.
//!
//! Every command writes its human-readable output to `out` so tests can
//! capture it, and returns the data it produced.

use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{WrapErr, bail, eyre};
use jiff::civil::Date;
use serde::Serialize;

use ember_assessment::analysis::{overall_wellness_score, priority_areas};
use ember_assessment::{EmberAssessment, Questionnaire, protocols};
use ember_core::keys;
use ember_core::models::assessment::{AssessmentResponse, AssessmentResult, PendingAssessment};
use ember_core::models::daily::DailyEntry;
use ember_core::models::parse_date;
use ember_core::models::progress::{
    CalendarDay, DayStatus, Habit, OverviewStats, PeriodProgress, ProgressAnalytics, TrackingPeriod,
};
use ember_export::json::TrackingExport;
use ember_export::styles::ReportStyles;
use ember_storage::{AssessmentStore, DateRange, EntryRepository, JsonFileStore};
use ember_tracking::calendar::calendar_range;
use ember_tracking::period;

use crate::config::{self, EmberConfig};

/// Opened config plus the store it points at.
pub struct Workspace {
    pub config: EmberConfig,
    pub config_dir: PathBuf,
    pub store: JsonFileStore,
    pub today: Date,
}

impl Workspace {
    /// Load the config from `config_dir` and open its data directory.
    /// `data_dir` overrides the configured location for this run only.
    pub fn open(config_dir: PathBuf, data_dir: Option<PathBuf>) -> eyre::Result<Self> {
        let config = config::load_or_default(&config_dir)?;
        let dir = match data_dir {
            Some(dir) => dir,
            None => config.resolved_data_dir()?,
        };
        let store = JsonFileStore::open(&dir)?;
        Ok(Self {
            config,
            config_dir,
            store,
            today: jiff::Zoned::now().date(),
        })
    }

    pub fn with_today(self, today: Date) -> Self {
        Self { today, ..self }
    }
}

/// Score the answers in `answers`, print the result and optionally keep it
/// as the saved result or as a pending assessment.
pub fn score(
    ws: &Workspace,
    answers: &Path,
    save: bool,
    pending: bool,
    out: &mut dyn Write,
) -> eyre::Result<AssessmentResult> {
    let contents = std::fs::read_to_string(answers)
        .wrap_err_with(|| format!("failed to read answers from {}", answers.display()))?;
    let responses: AssessmentResponse =
        serde_json::from_str(&contents).wrap_err("answers must be an object of id -> 0..3")?;

    let problems = EmberAssessment.validate(&responses);
    for problem in &problems {
        tracing::warn!(question = %problem.question_id, value = problem.value, "{problem}");
    }

    let result = EmberAssessment.score(&responses);
    tracing::info!(
        profile = %result.primary_profile,
        answers = responses.len(),
        invalid = problems.len(),
        "assessment scored"
    );
    write_result(&result, out)?;

    if save {
        ws.store.save_result(&result)?;
        writeln!(out, "\nResult saved.")?;
    }
    if pending {
        ws.store.save_pending(&PendingAssessment {
            answers: responses,
            timestamp: result.completed_at,
            result: result.clone(),
        })?;
        writeln!(out, "\nPending assessment saved.")?;
    }
    Ok(result)
}

/// Print the saved result, promoting a pending assessment if that is all
/// there is.
pub fn show_result(ws: &Workspace, out: &mut dyn Write) -> eyre::Result<Option<AssessmentResult>> {
    let result = match ws.store.load_result()? {
        Some(result) => Some(result),
        None => ws.store.claim_pending()?,
    };
    match &result {
        Some(result) => write_result(result, out)?,
        None => writeln!(out, "No assessment result saved. Run `ember score --save` first.")?,
    }
    Ok(result)
}

fn write_result(result: &AssessmentResult, out: &mut dyn Write) -> eyre::Result<()> {
    writeln!(out, "Primary profile: {}", result.primary_profile)?;
    writeln!(out, "Overall wellness: {}/100", overall_wellness_score(result))?;
    writeln!(out)?;
    for section in &result.section_scores {
        writeln!(
            out,
            "  {:<28} {:>2}/{:<2}  {}",
            section.title,
            section.score,
            section.max_score,
            section.impact_level.as_str()
        )?;
    }

    let priorities = priority_areas(result);
    if !priorities.is_empty() {
        writeln!(out, "\nPriority areas:")?;
        for (rank, section) in priorities.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} ({}/{})",
                rank + 1,
                section.title,
                section.score,
                section.max_score
            )?;
        }
    }
    Ok(())
}

/// Print the protocol for `label`, or for the saved result's profile.
pub fn protocol(ws: &Workspace, label: Option<&str>, out: &mut dyn Write) -> eyre::Result<()> {
    let label = match label {
        Some(label) => label.to_string(),
        None => {
            ws.store
                .load_result()?
                .ok_or_else(|| eyre!("no saved result; pass a profile label"))?
                .primary_profile
        }
    };
    let bundle = protocols::require(&label)?;

    writeln!(out, "{}\n", bundle.profile)?;
    writeln!(out, "{}\n", bundle.description)?;
    writeln!(out, "{}\n", bundle.detailed_description)?;

    writeln!(out, "Supplements:")?;
    for supplement in bundle.supplements {
        writeln!(out, "  {}", supplement.summary())?;
        writeln!(out, "    timing:  {}", supplement.timing)?;
        writeln!(out, "    purpose: {}", supplement.purpose)?;
    }

    writeln!(out, "\nLifestyle:")?;
    for category in bundle.lifestyle {
        writeln!(out, "  {}", category.name)?;
        for item in category.items {
            writeln!(out, "    - {item}")?;
        }
    }

    writeln!(out, "\nTimeline:")?;
    for milestone in bundle.timeline {
        writeln!(out, "  Week {}: {}", milestone.week, milestone.expectation)?;
    }

    if !bundle.optional.is_empty() {
        writeln!(
            out,
            "\nOptional support (after {}): {}",
            protocols::OPTIONAL_SUPPORT_AFTER,
            bundle.optional.join(", ")
        )?;
    }
    Ok(())
}

/// Merge a partial entry document over the stored entry for its date (or a
/// freshly seeded one) and save it.
pub fn entry_upsert(ws: &Workspace, file: &Path, out: &mut dyn Write) -> eyre::Result<DailyEntry> {
    let contents = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("failed to read entry from {}", file.display()))?;
    let patch: serde_json::Value = serde_json::from_str(&contents)?;

    let date = patch
        .get("date")
        .and_then(|v| v.as_str())
        .ok_or_else(|| eyre!("entry must have a \"date\" string"))?;
    let date = parse_date(date)?;

    let base = match ws.store.get(date)? {
        Some(existing) => existing,
        None => DailyEntry::new(date, jiff::Timestamp::now()),
    };
    let entry = merge_entry(base, patch)?;
    let stored = ws.store.upsert(entry)?;

    writeln!(out, "Saved {} (completion {}%)", stored.date, stored.completion_score)?;
    Ok(stored)
}

/// Shallow merge: each top-level key in `patch` replaces the same key of
/// `base`. `id` and `created_at` from `base` always survive.
pub fn merge_entry(base: DailyEntry, patch: serde_json::Value) -> eyre::Result<DailyEntry> {
    let serde_json::Value::Object(patch) = patch else {
        bail!("entry must be a JSON object");
    };
    let id = base.id;
    let created_at = base.created_at;

    let mut merged = serde_json::to_value(base)?;
    if let Some(fields) = merged.as_object_mut() {
        fields.extend(patch);
    }
    let mut entry: DailyEntry = serde_json::from_value(merged).wrap_err("invalid entry")?;
    entry.id = id;
    entry.created_at = created_at;
    Ok(entry)
}

pub fn entry_show(
    ws: &Workspace,
    date: Date,
    out: &mut dyn Write,
) -> eyre::Result<Option<DailyEntry>> {
    let entry = ws.store.get(date)?;
    match &entry {
        Some(entry) => writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?,
        None => writeln!(out, "No entry for {date}")?,
    }
    Ok(entry)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: OverviewStats,
    pub period: PeriodProgress,
    #[serde(flatten)]
    pub analytics: ProgressAnalytics,
}

pub fn analytics(
    ws: &Workspace,
    range: DateRange,
    json: bool,
    out: &mut dyn Write,
) -> eyre::Result<AnalyticsReport> {
    let entries = ws.store.list(range)?;
    let report = AnalyticsReport {
        overview: ember_tracking::overview(&entries),
        period: period::period_progress(ws.config.tracking_period, &entries, ws.today),
        analytics: ember_tracking::analyze(&entries),
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(report);
    }

    let overview = &report.overview;
    writeln!(out, "{}: {}", ws.config.tracking_period.label(), period::describe(&report.period))?;
    writeln!(
        out,
        "Days tracked: {}  Avg completion: {}%  Avg wellness: {}  Best streak: {}",
        overview.total_days, overview.avg_completion, overview.avg_wellness, overview.best_streak
    )?;

    writeln!(out, "\nStreaks:")?;
    for streak in &report.analytics.streaks {
        writeln!(
            out,
            "  {:<24} current {:>3}  longest {:>3}",
            streak.habit.title(),
            streak.current_streak,
            streak.longest_streak
        )?;
    }

    writeln!(out, "\nAdherence:")?;
    for habit in Habit::ADHERENCE {
        if let Some(rate) = report.analytics.adherence_rates.get(habit) {
            writeln!(out, "  {:<24} {rate:>3}%", habit_name(habit))?;
        }
    }

    if !report.analytics.weekly_trends.is_empty() {
        writeln!(out, "\nWeekly trends:")?;
        for week in &report.analytics.weekly_trends {
            writeln!(
                out,
                "  {:<8} from {}  completion {:>3}%  wellness {:>3}  energy {:.1}  mood {:.1}  sleep {:.1}",
                week.week,
                week.start_date,
                week.avg_completion,
                week.avg_wellness,
                week.avg_energy,
                week.avg_mood,
                week.avg_sleep
            )?;
        }
    }
    Ok(report)
}

fn habit_name(habit: Habit) -> &'static str {
    match habit {
        Habit::Supplements => "Supplements",
        Habit::Exercise => "Exercise",
        Habit::Meditation => "Meditation",
        Habit::ProtocolMeals => "Protocol meals",
        Habit::ProtocolAdherence => "High completion",
    }
}

pub fn calendar(
    ws: &Workspace,
    from: Date,
    to: Date,
    out: &mut dyn Write,
) -> eyre::Result<Vec<CalendarDay>> {
    if to < from {
        bail!("calendar range ends ({to}) before it starts ({from})");
    }
    let entries = ws.store.list(DateRange::between(from, to))?;
    let days = calendar_range(&entries, from, to, ws.today);
    for day in &days {
        writeln!(
            out,
            "{}  {:<8} {:>3}%",
            day.date,
            status_name(day.status),
            day.completion_score
        )?;
    }
    Ok(days)
}

fn status_name(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Complete => "complete",
        DayStatus::Partial => "partial",
        DayStatus::Missed => "missed",
        DayStatus::Future => "future",
    }
}

/// Write the tracking dump. Defaults to `ember-wellness-data-<today>.json`
/// in the current directory.
pub fn export_tracking(
    ws: &Workspace,
    path: Option<PathBuf>,
    out: &mut dyn Write,
) -> eyre::Result<PathBuf> {
    let entries = ws.store.list(DateRange::all())?;
    let export = TrackingExport::new(ws.config.tracking_period, entries, jiff::Timestamp::now());
    let path = path.unwrap_or_else(|| PathBuf::from(keys::tracking_export(ws.today)));

    std::fs::write(&path, export.to_json()?)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        entries = export.entries.len(),
        "tracking data exported"
    );
    writeln!(out, "Exported {} entries to {}", export.entries.len(), path.display())?;
    Ok(path)
}

/// Write the saved result as a DOCX report. Defaults to
/// `ember-method-assessment-<completion date>.docx`.
pub fn export_report(
    ws: &Workspace,
    path: Option<PathBuf>,
    out: &mut dyn Write,
) -> eyre::Result<PathBuf> {
    let result = ws
        .store
        .load_result()?
        .ok_or_else(|| eyre!("no saved result to export; run `ember score --save` first"))?;
    let bytes = ember_export::assessment_report_docx(&result, &ReportStyles::default())?;

    let path = path.unwrap_or_else(|| {
        let completed = result.completed_at.to_zoned(jiff::tz::TimeZone::system()).date();
        PathBuf::from(keys::assessment_report(completed))
    });
    std::fs::write(&path, &bytes)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    writeln!(out, "Report written to {}", path.display())?;
    Ok(path)
}

/// Remove every stored entry. Refuses unless `confirmed`.
pub fn clear(ws: &Workspace, confirmed: bool, out: &mut dyn Write) -> eyre::Result<usize> {
    if !confirmed {
        bail!("this removes all tracking data; re-run with --yes to confirm");
    }
    let removed = ws.store.clear()?;
    writeln!(out, "Removed {removed} entries.")?;
    Ok(removed)
}

pub fn config_show(ws: &Workspace, out: &mut dyn Write) -> eyre::Result<()> {
    writeln!(out, "config dir:      {}", ws.config_dir.display())?;
    writeln!(out, "data dir:        {}", ws.store.dir().display())?;
    writeln!(
        out,
        "tracking period: {} ({})",
        ws.config.tracking_period.as_str(),
        ws.config.tracking_period.label()
    )?;
    writeln!(out, "log level:       {}", ws.config.log_level)?;
    Ok(())
}

pub fn config_set_period(ws: &mut Workspace, value: &str, out: &mut dyn Write) -> eyre::Result<()> {
    let period = TrackingPeriod::parse(value).ok_or_else(|| {
        eyre!("unknown tracking period '{value}' (expected 90-day, 6-month, 1-year or custom)")
    })?;
    ws.config.tracking_period = period;
    config::save_config(&ws.config_dir, &ws.config)?;
    writeln!(out, "Tracking period set to {}", period.label())?;
    Ok(())
}

pub fn config_set_data_dir(
    ws: &mut Workspace,
    dir: PathBuf,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    ws.config.data_dir = Some(dir.clone());
    config::save_config(&ws.config_dir, &ws.config)?;
    writeln!(out, "Data directory set to {}", dir.display())?;
    Ok(())
}
