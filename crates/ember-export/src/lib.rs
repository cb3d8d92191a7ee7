//! ember-export
//!
//! Downloadable artifacts: the tracking JSON dump and the assessment
//! report (Tera template rendered to Markdown-ish text, then to DOCX).

pub mod docx;
pub mod error;
pub mod json;
pub mod render;
pub mod report;
pub mod styles;

use ember_core::models::assessment::AssessmentResult;

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Render the assessment report for `result` straight to DOCX bytes.
pub fn assessment_report_docx(
    result: &AssessmentResult,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let context = report::ReportContext::build(result);
    let rendered = render::render_report(&context)?;
    let bytes = docx::generate_docx(&rendered, styles)?;
    tracing::info!(
        profile = %result.primary_profile,
        bytes = bytes.len(),
        "assessment report generated"
    );
    Ok(bytes)
}
