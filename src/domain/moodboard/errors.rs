//! Moodboard-specific error types.

use crate::domain::foundation::{DomainError, ElementId, ErrorCode, MoodboardId, ValidationError};

/// Errors raised by moodboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodboardError {
    NotFound(MoodboardId),
    ElementNotFound {
        moodboard_id: MoodboardId,
        element_id: ElementId,
    },
    ValidationFailed { field: String, message: String },
    Store(String),
}

impl MoodboardError {
    pub fn not_found(id: MoodboardId) -> Self {
        MoodboardError::NotFound(id)
    }

    pub fn element_not_found(moodboard_id: MoodboardId, element_id: ElementId) -> Self {
        MoodboardError::ElementNotFound {
            moodboard_id,
            element_id,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MoodboardError::NotFound(_) => ErrorCode::MoodboardNotFound,
            MoodboardError::ElementNotFound { .. } => ErrorCode::ElementNotFound,
            MoodboardError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MoodboardError::Store(_) => ErrorCode::StoreError,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, MoodboardError::Store(_))
    }

    pub fn message(&self) -> String {
        match self {
            MoodboardError::NotFound(id) => format!("Moodboard not found: {}", id),
            MoodboardError::ElementNotFound {
                moodboard_id,
                element_id,
            } => format!("Element {} not found on moodboard {}", element_id, moodboard_id),
            MoodboardError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MoodboardError::Store(msg) => format!("Failed to reach your moodboards: {}", msg),
        }
    }
}

impl std::fmt::Display for MoodboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MoodboardError {}

impl From<ValidationError> for MoodboardError {
    fn from(err: ValidationError) -> Self {
        MoodboardError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MoodboardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MoodboardNotFound => {
                let id = err
                    .details
                    .get("id")
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or_default();
                MoodboardError::NotFound(MoodboardId::new(id))
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => MoodboardError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MoodboardError::Store(err.to_string()),
        }
    }
}
