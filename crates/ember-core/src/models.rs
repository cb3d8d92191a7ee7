pub mod assessment;
pub mod daily;
pub mod progress;
pub mod protocol;

use crate::error::CoreError;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<jiff::civil::Date, CoreError> {
    input
        .trim()
        .parse::<jiff::civil::Date>()
        .map_err(|e| CoreError::InvalidDate {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
