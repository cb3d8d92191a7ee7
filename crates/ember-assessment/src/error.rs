use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("no protocol defined for profile '{0}'")]
    UnknownProfile(String),
}
