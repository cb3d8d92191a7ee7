//! Derived views over a finished [`AssessmentResult`].

use ember_core::models::assessment::{AssessmentResult, ImpactLevel, SectionScore};

/// How many major-impact sections are surfaced as priorities.
pub const MAX_PRIORITIES: usize = 3;

/// Up to three major-impact sections, highest score first. Equal scores
/// keep catalog order.
pub fn priority_areas(result: &AssessmentResult) -> Vec<&SectionScore> {
    let mut major: Vec<&SectionScore> = result
        .section_scores
        .iter()
        .filter(|s| s.impact_level == ImpactLevel::Major)
        .collect();
    // stable sort
    major.sort_by(|a, b| b.score.cmp(&a.score));
    major.truncate(MAX_PRIORITIES);
    major
}

/// Sections that need an action plan (anything above minimal), in catalog
/// order.
pub fn action_areas(result: &AssessmentResult) -> Vec<&SectionScore> {
    result
        .section_scores
        .iter()
        .filter(|s| s.impact_level != ImpactLevel::Minimal)
        .collect()
}

/// Headline wellness score, 0–100: the share of available points that were
/// *not* scored. 100 means no symptoms reported.
pub fn overall_wellness_score(result: &AssessmentResult) -> u32 {
    let max: u32 = result.section_scores.iter().map(|s| s.max_score).sum();
    if max == 0 {
        return 100;
    }
    let scored: u32 = result.section_scores.iter().map(|s| s.score).sum();
    let remaining = f64::from(max.saturating_sub(scored));
    (remaining / f64::from(max) * 100.0).round() as u32
}
