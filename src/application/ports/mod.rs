mod module_repository;

pub use module_repository::{ModuleRepository, RepositoryError};

#[cfg(test)]
pub use module_repository::MockModuleRepository;
