use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::{error, info, warn};

use crate::api::router::AppState;
use crate::application::{
    ports::ModuleRepository,
    use_cases::{CreateModuleUseCase, GetModuleUseCase},
};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::persistence::{InMemoryModuleRepository, PostgresModuleRepository};

pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

const CONNECT_RETRIES: u32 = 3;

/// Application builder for dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    module_repo: Option<Arc<dyn ModuleRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            module_repo: None,
        }
    }

    /// Use an externally constructed repository
    pub fn with_repository(mut self, repo: Arc<dyn ModuleRepository>) -> Self {
        self.module_repo = Some(repo);
        self
    }

    pub fn with_in_memory(self) -> Self {
        info!("Using in-memory module store");
        self.with_repository(Arc::new(InMemoryModuleRepository::new()))
    }

    /// Connect to PostgreSQL with retry, then apply migrations
    pub async fn with_database(mut self) -> Result<Self, BuildError> {
        let url = self
            .config
            .database_url
            .clone()
            .ok_or("DATABASE_URL is not set")?;

        let mut retries = CONNECT_RETRIES;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .connect(&url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        error = %e,
                        retries_left = retries,
                        delay_ms = delay.as_millis() as u64,
                        "database_connect_retry"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    error!(error = %e, "database_connect_failed");
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            max_connections = self.config.db_max_connections,
            min_connections = self.config.db_min_connections,
            acquire_timeout_secs = self.config.db_acquire_timeout_secs,
            "database_pool_ready"
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                error!(error = %e, "migrations_failed");
                e
            })?;

        self.module_repo = Some(Arc::new(PostgresModuleRepository::new(pool)));
        Ok(self)
    }

    /// Pick the repository named by `storage_backend`
    pub async fn with_configured_storage(self) -> Result<Self, BuildError> {
        match self.config.storage_backend {
            StorageBackend::Memory => Ok(self.with_in_memory()),
            StorageBackend::Postgres => self.with_database().await,
        }
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, BuildError> {
        let module_repo = self
            .module_repo
            .ok_or("Module repository not initialized")?;

        Ok(AppState {
            create_module_use_case: Arc::new(CreateModuleUseCase::new(Arc::clone(&module_repo))),
            get_module_use_case: Arc::new(GetModuleUseCase::new(module_repo)),
            max_body_bytes: self.config.max_body_bytes,
        })
    }
}
