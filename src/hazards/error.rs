use thiserror::Error;

/// Rejections raised at the boundary before readings reach the index engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HazardError {
    #[error("{field} must be a finite number")]
    NonFinite { field: String },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("unknown pollutant: {0}")]
    UnknownPollutant(String),

    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("no pollutant readings supplied")]
    NoReadings,
}
