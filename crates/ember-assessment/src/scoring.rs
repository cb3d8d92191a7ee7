use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use ember_core::models::assessment::{
    AssessmentResponse, AssessmentResult, ImpactLevel, Section, SectionScore,
};

use crate::profile::{
    self, CHEMICAL_INTERFERENCE, FALLBACK_PROFILE, INFLAMMATORY_FIRE, TOXIC_AND_OVERWHELMED,
};

/// Highest answer value ("almost always").
pub const MAX_ANSWER: u8 = 3;

/// Upper bound (inclusive) of the minimal band.
pub const MINIMAL_MAX: u32 = 8;

/// Upper bound (inclusive) of the moderate band.
pub const MODERATE_MAX: u32 = 16;

/// Both chemical-interference and inflammatory-fire at or above this force
/// the combined profile.
pub const COMBINED_PROFILE_THRESHOLD: u32 = 17;

/// Classify a raw section score.
///
/// The breakpoints are absolute and assume eight questions worth three
/// points each. They do not scale with `max_score`.
pub fn classify_impact(score: u32) -> ImpactLevel {
    if score <= MINIMAL_MAX {
        ImpactLevel::Minimal
    } else if score <= MODERATE_MAX {
        ImpactLevel::Moderate
    } else {
        ImpactLevel::Major
    }
}

/// Sum each section's answers, in catalog order. Unanswered questions
/// contribute 0 and answers above [`MAX_ANSWER`] count as [`MAX_ANSWER`],
/// so a score never exceeds its section maximum.
pub fn score_sections(responses: &AssessmentResponse, catalog: &[Section]) -> Vec<SectionScore> {
    catalog
        .iter()
        .map(|section| {
            let score: u32 = section
                .questions
                .iter()
                .map(|q| u32::from(responses.answer(&q.id).min(MAX_ANSWER)))
                .sum();

            SectionScore {
                section_id: section.id.clone(),
                title: section.title.clone(),
                score,
                max_score: section.max_score(),
                impact_level: classify_impact(score),
            }
        })
        .collect()
}

/// Pick the profile label for a set of section scores.
///
/// The highest score wins and a tie keeps the earlier section. When both
/// chemical-interference and inflammatory-fire reach
/// [`COMBINED_PROFILE_THRESHOLD`] the combined profile wins regardless.
pub fn primary_profile<F>(scores: &[SectionScore], labels: F) -> String
where
    F: Fn(&str) -> Option<&'static str>,
{
    let score_of = |id: &str| {
        scores
            .iter()
            .find(|s| s.section_id == id)
            .map(|s| s.score)
            .unwrap_or(0)
    };

    if score_of(CHEMICAL_INTERFERENCE) >= COMBINED_PROFILE_THRESHOLD
        && score_of(INFLAMMATORY_FIRE) >= COMBINED_PROFILE_THRESHOLD
    {
        return TOXIC_AND_OVERWHELMED.to_string();
    }

    let mut highest: Option<&SectionScore> = None;
    for current in scores {
        match highest {
            Some(best) if current.score <= best.score => {}
            _ => highest = Some(current),
        }
    }

    highest
        .and_then(|s| labels(&s.section_id))
        .unwrap_or(FALLBACK_PROFILE)
        .to_string()
}

/// Score responses against a catalog using the standard profile labels.
pub fn score(responses: &AssessmentResponse, catalog: &[Section]) -> AssessmentResult {
    score_at(responses, catalog, jiff::Timestamp::now())
}

/// [`score`] with an explicit completion time.
pub fn score_at(
    responses: &AssessmentResponse,
    catalog: &[Section],
    completed_at: jiff::Timestamp,
) -> AssessmentResult {
    let section_scores = score_sections(responses, catalog);
    let primary_profile = primary_profile(&section_scores, profile::profile_for_section);
    AssessmentResult {
        section_scores,
        primary_profile,
        completed_at,
    }
}

/// Ids of questions in `section` that have no answer yet.
pub fn unanswered<'a>(section: &'a Section, responses: &AssessmentResponse) -> Vec<&'a str> {
    section
        .questions
        .iter()
        .filter(|q| !responses.0.contains_key(&q.id))
        .map(|q| q.id.as_str())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    OutOfRange,
    UnknownQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: u8,
    pub kind: ValidationKind,
    pub message: String,
}

/// Report answers outside 0–3 and answers to questions not in the catalog.
pub fn validate_responses(
    responses: &AssessmentResponse,
    catalog: &[Section],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (question_id, value) in responses.iter() {
        let known = catalog
            .iter()
            .flat_map(|s| &s.questions)
            .any(|q| q.id == question_id);

        if !known {
            errors.push(ValidationError {
                question_id: question_id.to_string(),
                value,
                kind: ValidationKind::UnknownQuestion,
                message: format!("unknown question '{question_id}'"),
            });
        } else if value > MAX_ANSWER {
            errors.push(ValidationError {
                question_id: question_id.to_string(),
                value,
                kind: ValidationKind::OutOfRange,
                message: format!(
                    "{question_id}: answer {value} is outside range [0, {MAX_ANSWER}]"
                ),
            });
        }
    }
    errors
}
