//! Outfit-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, OutfitId, PlanningId, ValidationError};

/// Errors raised by closet and calendar operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutfitError {
    /// Outfit was not found.
    NotFound(OutfitId),
    /// Planning entry was not found on the outfit.
    PlanningNotFound {
        outfit_id: OutfitId,
        planning_id: PlanningId,
    },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The store failed; the caller may retry.
    Store(String),
}

impl OutfitError {
    pub fn not_found(id: OutfitId) -> Self {
        OutfitError::NotFound(id)
    }
    pub fn planning_not_found(outfit_id: OutfitId, planning_id: PlanningId) -> Self {
        OutfitError::PlanningNotFound {
            outfit_id,
            planning_id,
        }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OutfitError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn store(message: impl Into<String>) -> Self {
        OutfitError::Store(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OutfitError::NotFound(_) => ErrorCode::OutfitNotFound,
            OutfitError::PlanningNotFound { .. } => ErrorCode::PlanningNotFound,
            OutfitError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OutfitError::Store(_) => ErrorCode::StoreError,
        }
    }
    /// Store failures surface as a retryable error state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, OutfitError::Store(_))
    }
    pub fn message(&self) -> String {
        match self {
            OutfitError::NotFound(id) => format!("Outfit not found: {}", id),
            OutfitError::PlanningNotFound {
                outfit_id,
                planning_id,
            } => format!(
                "Planning {} not found for outfit {}",
                planning_id, outfit_id
            ),
            OutfitError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OutfitError::Store(msg) => format!("Failed to reach your closet: {}", msg),
        }
    }
}

impl std::fmt::Display for OutfitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OutfitError {}

impl From<ValidationError> for OutfitError {
    fn from(err: ValidationError) -> Self {
        OutfitError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for OutfitError {
    fn from(err: DomainError) -> Self {
        let id_detail = |key: &str| {
            err.details
                .get(key)
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or_default()
        };
        match err.code {
            ErrorCode::OutfitNotFound => OutfitError::NotFound(OutfitId::new(id_detail("id"))),
            ErrorCode::PlanningNotFound => OutfitError::PlanningNotFound {
                outfit_id: OutfitId::new(id_detail("outfit_id")),
                planning_id: PlanningId::new(id_detail("id")),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => OutfitError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => OutfitError::Store(err.to_string()),
        }
    }
}
