use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid module ID: {0}")]
    InvalidModuleId(String),
}
