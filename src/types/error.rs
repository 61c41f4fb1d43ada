use thiserror::Error;

/// hourmap error types
#[derive(Error, Debug)]
pub enum HourmapError {
    /// Required category columns absent or misaligned
    #[error("missing data: {0}")]
    MissingData(String),

    /// Hour label failed to parse as an integer
    #[error("invalid hour label {label:?} at row {row}")]
    InvalidHourLabel { label: String, row: usize },

    /// Color string failed to parse
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Result type alias for hourmap
pub type Result<T> = std::result::Result<T, HourmapError>;
