//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! A draft failing validation is not an error at all: it comes back as
//! [`crate::application::Submission::Rejected`].

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The store could not persist a record.
    #[error("Failed to persist to {path}: {reason}")]
    PersistenceFailed { path: PathBuf, reason: String },

    /// A record could not be encoded for the store.
    #[error("Failed to serialize product records: {reason}")]
    SerializationFailed { reason: String },

    /// Store access failed (lock poisoned).
    #[error("Product store is unavailable")]
    StoreLockError,

    /// A record with this id is already stored.
    #[error("A product with id '{id}' already exists")]
    DuplicateProduct { id: String },

    /// The id generator kept producing ids that are already taken.
    #[error("Could not generate an unused product id after {attempts} attempts")]
    IdGenerationExhausted { attempts: usize },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PersistenceFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
                "The product was NOT saved; submit it again once fixed".into(),
            ],
            Self::StoreLockError => vec![
                "The product store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::DuplicateProduct { id } => vec![
                format!("'{}' is already in the catalog", id),
                "Open a new form to get a fresh product id".into(),
            ],
            Self::IdGenerationExhausted { .. } => vec![
                "The id generator keeps colliding with stored products".into(),
                "Switch to ids.strategy = \"uuid\" in your configuration".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PersistenceFailed { .. } | Self::SerializationFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::StoreLockError => ErrorCategory::Internal,
            Self::DuplicateProduct { .. } => ErrorCategory::Validation,
            Self::IdGenerationExhausted { .. } => ErrorCategory::Configuration,
        }
    }
}
