//! Error kinds surfaced by the tracking core.
//!
//! A resource that exists but belongs to another parent is reported as
//! `NotFound`, exactly like a resource that does not exist at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl TrackingError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Unauthorized(_) => "unauthorized",
            Self::Storage(_) => "storage",
        }
    }
}

pub type TrackingResult<T> = Result<T, TrackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_convert_with_question_mark() {
        fn failing() -> TrackingResult<()> {
            Err(anyhow::anyhow!("disk on fire"))?;
            Ok(())
        }

        let err = failing().unwrap_err();
        assert_eq!(err.kind(), "storage");
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_not_found_message() {
        let err = TrackingError::not_found("Zone");
        assert_eq!(err.to_string(), "Zone not found");
        assert_eq!(err.kind(), "not_found");
    }
}
