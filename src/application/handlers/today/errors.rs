//! Look-of-the-day error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Shown when the closet cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load your outfits. Let's try again! 💖";

/// Errors raised while building the look of the day.
///
/// Weather problems never surface here; they degrade to a fallback reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodayError {
    /// The unfiltered closet could not be read. The user may retry.
    Store(String),
}

impl TodayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TodayError::Store(_) => ErrorCode::StoreError,
        }
    }

    pub fn is_retryable(&self) -> bool {
        true
    }

    pub fn message(&self) -> String {
        match self {
            TodayError::Store(_) => LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    /// Underlying cause, for logs.
    pub fn cause(&self) -> &str {
        match self {
            TodayError::Store(cause) => cause,
        }
    }
}

impl std::fmt::Display for TodayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.cause())
    }
}

impl std::error::Error for TodayError {}

impl From<DomainError> for TodayError {
    fn from(err: DomainError) -> Self {
        TodayError::Store(err.to_string())
    }
}
