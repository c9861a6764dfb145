use std::sync::Arc;
use tracing::info;

use crate::application::dto::{ModuleRequest, ModuleResponse};
use crate::application::errors::ModuleError;
use crate::application::ports::{ModuleRepository, RepositoryError};
use crate::application::validation::{validate_description, validate_name};
use crate::domain::entities::NewModule;

/// Use case: Create a module
pub struct CreateModuleUseCase {
    module_repo: Arc<dyn ModuleRepository>,
}

impl CreateModuleUseCase {
    pub fn new(module_repo: Arc<dyn ModuleRepository>) -> Self {
        Self { module_repo }
    }

    /// Execute create workflow, stopping at the first rule that fails
    pub async fn execute(&self, request: ModuleRequest) -> Result<ModuleResponse, ModuleError> {
        // 1-2. Name present and within bounds
        let raw_name = request.name.unwrap_or_default();
        let name = validate_name(&raw_name)?;

        // 3. Name unique among existing modules
        let exists = self
            .module_repo
            .name_exists(name, None)
            .await
            .map_err(ModuleError::storage("checking name"))?;
        if exists {
            return Err(ModuleError::NameExists);
        }

        // 4. Description within bounds
        let description = request.description.unwrap_or_default();
        validate_description(&description)?;

        // 5. Persist
        let module = NewModule::new(name, description, request.is_active);
        let saved = self
            .module_repo
            .create(module)
            .await
            .map_err(|err| match err {
                // Lost a race with a concurrent create of the same name
                RepositoryError::ConstraintViolation(_) => ModuleError::NameExists,
                other => ModuleError::storage("creating module")(other),
            })?;

        info!(module_id = %saved.id(), name = %saved.name(), "module_created");

        Ok(ModuleResponse::from(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockModuleRepository;
    use crate::domain::value_objects::ModuleId;

    fn request(name: &str, description: Option<&str>) -> ModuleRequest {
        ModuleRequest {
            name: Some(name.to_string()),
            description: description.map(str::to_string),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_module_happy_path() {
        // Arrange
        let mut mock_repo = MockModuleRepository::new();
        mock_repo
            .expect_name_exists()
            .withf(|name, exclude| name.to_string() == "Inventory" && exclude.is_none())
            .times(1)
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|module| Ok(module.into_module(ModuleId::FIRST)));

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        // Act
        let result = use_case
            .execute(request("  Inventory ", Some("Stock tracking")))
            .await;

        // Assert
        let dto = result.unwrap();
        assert_eq!(dto.id, ModuleId::FIRST);
        assert_eq!(dto.name, "Inventory");
        assert_eq!(dto.description, "Stock tracking");
        assert!(dto.is_active);
        assert!(dto.created_at <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_create_module_missing_name_skips_repository() {
        let mock_repo = MockModuleRepository::new();
        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(ModuleRequest::default()).await;

        assert!(matches!(result, Err(ModuleError::NameRequired)));
    }

    #[tokio::test]
    async fn test_create_module_short_name() {
        let mock_repo = MockModuleRepository::new();
        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(request("In", None)).await;

        assert!(matches!(result, Err(ModuleError::NameLength)));
    }

    #[tokio::test]
    async fn test_create_module_duplicate_name() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(true));
        mock_repo.expect_create().never();

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(request("inventory", None)).await;

        assert!(matches!(result, Err(ModuleError::NameExists)));
    }

    #[tokio::test]
    async fn test_create_module_name_checked_before_description() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(true));

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));
        let description = "d".repeat(201);

        let result = use_case.execute(request("Inventory", Some(&description))).await;

        assert!(matches!(result, Err(ModuleError::NameExists)));
    }

    #[tokio::test]
    async fn test_create_module_long_description() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(false));
        mock_repo.expect_create().never();

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));
        let description = "d".repeat(201);

        let result = use_case.execute(request("Inventory", Some(&description))).await;

        assert!(matches!(result, Err(ModuleError::DescriptionLength)));
    }

    #[tokio::test]
    async fn test_create_module_name_check_fault_is_storage_error() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo
            .expect_name_exists()
            .returning(|_, _| Err(RepositoryError::Internal("connection reset".to_string())));

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(request("Inventory", None)).await;

        match result {
            Err(ModuleError::Storage { context, .. }) => assert_eq!(context, "checking name"),
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_module_persist_fault_is_storage_error() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(false));
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Internal("disk full".to_string())));

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(request("Inventory", None)).await;

        match result {
            Err(ModuleError::Storage { context, .. }) => assert_eq!(context, "creating module"),
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_module_lost_race_is_name_exists() {
        let mut mock_repo = MockModuleRepository::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(false));
        mock_repo.expect_create().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "modules_name_lower_key".to_string(),
            ))
        });

        let use_case = CreateModuleUseCase::new(Arc::new(mock_repo));

        let result = use_case.execute(request("Inventory", None)).await;

        assert!(matches!(result, Err(ModuleError::NameExists)));
    }
}
