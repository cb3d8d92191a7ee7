//! Template context for the assessment report.

use serde::Serialize;

use ember_assessment::analysis::priority_areas;
use ember_assessment::protocols::{self, OPTIONAL_SUPPORT_AFTER};
use ember_core::models::assessment::{AssessmentResult, SectionScore};
use ember_core::models::protocol::ProtocolBundle;

/// Cells in a text impact bar.
pub const BAR_WIDTH: usize = 20;

pub const REPORT_TITLE: &str = "The Ember Method Assessment Results";

pub const PROFILE_NOTE: &str = "This profile is based on your highest scoring section and \
     represents your primary health pattern.";

pub const FOOTER: [&str; 2] = [
    "© 2024 The Ember Method. Empowering women's health through personalized wellness.",
    "This assessment is for educational purposes only and does not replace professional \
     medical advice.",
];

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: &'static str,
    pub completed_on: String,
    pub primary_profile: String,
    pub profile_note: &'static str,
    pub sections: Vec<SectionLine>,
    pub priorities: Vec<PriorityLine>,
    pub protocol: Option<ProtocolSection>,
    pub footer: [&'static str; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionLine {
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub impact_level: &'static str,
    pub impact_label: &'static str,
    pub bar: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityLine {
    pub rank: usize,
    pub title: String,
    pub score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolSection {
    pub description: &'static str,
    /// "NAME: dosage"
    pub supplements: Vec<String>,
    pub lifestyle: Vec<LifestyleBlock>,
    pub optional: &'static [&'static str],
    pub optional_after: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LifestyleBlock {
    pub name: String,
    pub items: &'static [&'static str],
}

impl ReportContext {
    /// Context for `result`, with protocol content looked up by its
    /// profile label. An unknown label leaves `protocol` empty.
    pub fn build(result: &AssessmentResult) -> Self {
        Self::with_protocol(result, protocols::lookup(&result.primary_profile))
    }

    pub fn with_protocol(result: &AssessmentResult, protocol: Option<&ProtocolBundle>) -> Self {
        Self {
            title: REPORT_TITLE,
            completed_on: result.completed_at.strftime("%B %-d, %Y").to_string(),
            primary_profile: result.primary_profile.clone(),
            profile_note: PROFILE_NOTE,
            sections: result.section_scores.iter().map(section_line).collect(),
            priorities: priority_areas(result)
                .into_iter()
                .enumerate()
                .map(|(index, section)| PriorityLine {
                    rank: index + 1,
                    title: section.title.clone(),
                    score: section.score,
                    max_score: section.max_score,
                })
                .collect(),
            protocol: protocol.map(protocol_section),
            footer: FOOTER,
        }
    }
}

fn section_line(section: &SectionScore) -> SectionLine {
    SectionLine {
        title: section.title.clone(),
        score: section.score,
        max_score: section.max_score,
        impact_level: section.impact_level.as_str(),
        impact_label: section.impact_level.label(),
        bar: impact_bar(section.ratio()),
    }
}

fn protocol_section(bundle: &ProtocolBundle) -> ProtocolSection {
    ProtocolSection {
        description: bundle.description,
        supplements: bundle.supplements.iter().map(|s| s.summary()).collect(),
        lifestyle: bundle
            .lifestyle
            .iter()
            .map(|category| LifestyleBlock {
                name: capitalize(category.name),
                items: category.items,
            })
            .collect(),
        optional: bundle.optional,
        optional_after: OPTIONAL_SUPPORT_AFTER,
    }
}

/// Filled and empty block characters in proportion to `ratio` (0.0–1.0).
pub fn impact_bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = "\u{2588}".repeat(filled);
    bar.push_str(&"\u{2591}".repeat(BAR_WIDTH - filled));
    bar
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
