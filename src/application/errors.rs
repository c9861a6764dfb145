//! Error vocabulary of the module use cases
//!
//! Business rule violations are separate variants so callers can match them
//! individually; storage faults are wrapped with the step that failed.

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module name is required")]
    NameRequired,

    #[error("name must be 3-50 characters")]
    NameLength,

    #[error("module name already exists")]
    NameExists,

    #[error("description exceeds 200 characters")]
    DescriptionLength,

    #[error("module not found")]
    NotFound,

    #[error(transparent)]
    InvalidId(#[from] DomainError),

    #[error("database error {context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ModuleError {
    pub(crate) fn storage(context: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Storage { context, source }
    }
}
