// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported more than once by the CLI)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    #[error("Unknown existing-entry policy: {0}")]
    UnknownPolicy(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Scaffold plan is malformed: {0}")]
    MalformedPlan(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResourceName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use ASCII letters, digits, and underscores only".into(),
                "Examples: Rate, HolidayModifier, contract_rate".into(),
            ],
            Self::UnknownArtifactKind(kind) => vec![
                format!("'{}' is not an artifact kind", kind),
                "Known kinds: add-handler, add-schema, get-handler, delete-handler, update-handler, update-schema".into(),
            ],
            Self::UnknownPolicy(policy) => vec![
                format!("'{}' is not an existing-entry policy", policy),
                "Known policies: abort, skip, overwrite".into(),
            ],
            _ => vec!["This appears to be a bug in crudgen, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResourceName { .. }
            | Self::UnknownArtifactKind(_)
            | Self::UnknownPolicy(_) => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::MalformedPlan(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
