//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `#[from]`.

/// Top-level error for the folio workspace.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Invariant violations on portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} is not a valid link: {value:?}")]
    InvalidLink { field: &'static str, value: String },

    #[error("invalid publication date {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("tech stack must list at least one technology")]
    EmptyTechStack,
}

/// Failures of the durable key-value store backing the theme preference.
///
/// These never reach the user: the theme store logs them and keeps working
/// on in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,

    #[error("failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_folio_error() {
        let err: FolioError = ValidationError::EmptyTechStack.into();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::EmptyTechStack)
        ));
    }

    #[test]
    fn should_convert_storage_error_into_folio_error() {
        let err: FolioError = StorageError::Unavailable.into();
        assert!(matches!(err, FolioError::Storage(StorageError::Unavailable)));
    }

    #[test]
    fn should_name_field_when_displaying_empty_field() {
        let err = ValidationError::EmptyField { field: "title" };
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn should_include_key_and_reason_when_displaying_write_failure() {
        let err = StorageError::Write {
            key: "theme".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write \"theme\": QuotaExceededError"
        );
    }
}
