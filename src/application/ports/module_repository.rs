use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Module, NewModule};
use crate::domain::value_objects::ModuleId;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for module persistence operations.
///
/// Implementations only fail on storage faults; business conditions such as a
/// duplicate name are answered through return values.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    /// Assign the next identifier and store the module
    async fn create(&self, module: NewModule) -> Result<Module, RepositoryError>;

    /// Case-insensitive name lookup, optionally ignoring one record.
    ///
    /// An empty name never matches.
    async fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<ModuleId>,
    ) -> Result<bool, RepositoryError>;

    /// Find module by ID, `None` when no such record exists
    async fn find_by_id(&self, id: ModuleId) -> Result<Option<Module>, RepositoryError>;
}
