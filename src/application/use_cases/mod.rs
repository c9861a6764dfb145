mod create_module;
mod get_module;

pub use create_module::CreateModuleUseCase;
pub use get_module::GetModuleUseCase;
