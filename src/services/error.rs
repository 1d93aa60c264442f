use thiserror::Error;

use crate::hazards::HazardError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Hazard(#[from] HazardError),

    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("missing data: {0}")]
    MissingData(String),

    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Failures worth retrying: timeouts, connection errors and 5xx responses
    pub fn is_transient(&self) -> bool {
        match self {
            ServiceError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().map(|s| s.is_server_error()).unwrap_or(false)
            }
            _ => false,
        }
    }
}
