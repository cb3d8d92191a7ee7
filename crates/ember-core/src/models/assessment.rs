use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single questionnaire item, answered on a 0–3 frequency scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// A themed group of questions. Each section maps to one health profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    /// Points available per question ("almost always").
    pub const POINTS_PER_QUESTION: u32 = 3;

    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * Self::POINTS_PER_QUESTION
    }
}

/// Answers keyed by question id. Only answered questions are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResponse(pub BTreeMap<String, u8>);

impl AssessmentResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded answer, or 0 when the question was skipped.
    pub fn answer(&self, question_id: &str) -> u8 {
        self.0.get(question_id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, question_id: impl Into<String>, value: u8) {
        self.0.insert(question_id.into(), value);
    }

    pub fn with(mut self, question_id: impl Into<String>, value: u8) -> Self {
        self.set(question_id, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u8)> for AssessmentResponse {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Severity band for a section score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ImpactLevel {
    Minimal,
    Moderate,
    Major,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Minimal => "minimal",
            ImpactLevel::Moderate => "moderate",
            ImpactLevel::Major => "major",
        }
    }

    /// Label shown next to an impact bar in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Minimal => "Minimal Impact (0-8 points)",
            ImpactLevel::Moderate => "Moderate Impact (9-16 points)",
            ImpactLevel::Major => "Major Impact (17-24 points)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionScore {
    pub section_id: String,
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub impact_level: ImpactLevel,
}

impl SectionScore {
    /// Fraction of the section maximum, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }
}

/// Outcome of a completed assessment. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub section_scores: Vec<SectionScore>,
    pub primary_profile: String,
    pub completed_at: jiff::Timestamp,
}

impl AssessmentResult {
    pub fn section(&self, section_id: &str) -> Option<&SectionScore> {
        self.section_scores
            .iter()
            .find(|s| s.section_id == section_id)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An assessment taken before the user signed in, held until it can be
/// attached to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingAssessment {
    pub answers: AssessmentResponse,
    pub timestamp: jiff::Timestamp,
    pub result: AssessmentResult,
}
