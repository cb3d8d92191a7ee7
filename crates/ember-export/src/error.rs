use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("report template '{name}' does not parse: {reason}")]
    TemplateParse { name: String, reason: String },

    #[error("report template failed to render: {0}")]
    TemplateRender(String),

    #[error("failed to package DOCX report: {0}")]
    Package(String),

    #[error("failed to encode export data: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(describe(&e))
    }
}

/// Tera keeps the useful detail in the source chain; join it into one line.
pub(crate) fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
