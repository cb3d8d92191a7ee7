use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("invalid calendar month {year}-{month}: {source}")]
    InvalidMonth {
        year: i16,
        month: i8,
        #[source]
        source: jiff::Error,
    },

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
