use std::sync::Arc;

use crate::application::dto::ModuleResponse;
use crate::application::errors::ModuleError;
use crate::application::ports::ModuleRepository;
use crate::domain::value_objects::ModuleId;

/// Use case: Get a module by ID
pub struct GetModuleUseCase {
    module_repo: Arc<dyn ModuleRepository>,
}

impl GetModuleUseCase {
    pub fn new(module_repo: Arc<dyn ModuleRepository>) -> Self {
        Self { module_repo }
    }

    /// Look up a module from the raw path segment
    pub async fn execute(&self, raw_id: &str) -> Result<ModuleResponse, ModuleError> {
        let id = raw_id.parse::<ModuleId>()?;
        self.execute_by_id(id).await
    }

    pub async fn execute_by_id(&self, id: ModuleId) -> Result<ModuleResponse, ModuleError> {
        let module = self
            .module_repo
            .find_by_id(id)
            .await
            .map_err(ModuleError::storage("loading module"))?
            .ok_or(ModuleError::NotFound)?;

        Ok(ModuleResponse::from(module))
    }
}
