mod in_memory_module_repository;
mod postgres_module_repository;

pub use in_memory_module_repository::InMemoryModuleRepository;
pub use postgres_module_repository::PostgresModuleRepository;
