//! ember-assessment
//!
//! The wellness questionnaire: static section catalog, profile labels,
//! scoring rules and protocol content. Pure data and pure functions, no I/O.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod protocols;
pub mod scoring;

use ember_core::models::assessment::{AssessmentResponse, AssessmentResult, Section};

use error::AssessmentError;
use scoring::ValidationError;

/// A questionnaire whose answers can be scored into a profile.
pub trait Questionnaire: Send + Sync {
    /// Sections in catalog order. Order decides profile tie-breaks.
    fn sections(&self) -> &[Section];

    /// Profile label for the section that scored highest.
    fn profile_for(&self, section_id: &str) -> Option<&'static str> {
        profile::profile_for_section(section_id)
    }

    /// Check answers against the catalog: values must be 0–3 and ids must
    /// belong to a known question.
    fn validate(&self, responses: &AssessmentResponse) -> Vec<ValidationError> {
        scoring::validate_responses(responses, self.sections())
    }

    /// Score the responses. Never fails; unanswered questions count as 0.
    fn score(&self, responses: &AssessmentResponse) -> AssessmentResult {
        let section_scores = scoring::score_sections(responses, self.sections());
        let primary_profile = scoring::primary_profile(&section_scores, |id| self.profile_for(id));
        AssessmentResult {
            section_scores,
            primary_profile,
            completed_at: jiff::Timestamp::now(),
        }
    }

    /// Validate first and refuse to score data containing invalid answers.
    fn score_strict(
        &self,
        responses: &AssessmentResponse,
    ) -> Result<AssessmentResult, AssessmentError> {
        if let Some(first) = self.validate(responses).into_iter().next() {
            return Err(first.into());
        }
        Ok(self.score(responses))
    }
}

/// The standard seven-section wellness assessment.
pub struct EmberAssessment;

impl Questionnaire for EmberAssessment {
    fn sections(&self) -> &[Section] {
        catalog::assessment_sections()
    }
}
