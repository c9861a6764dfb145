use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{ModuleRepository, RepositoryError};
use crate::domain::entities::{Module, NewModule};
use crate::domain::value_objects::ModuleId;

pub struct PostgresModuleRepository {
    pool: PgPool,
}

impl PostgresModuleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModuleRepository for PostgresModuleRepository {
    async fn create(&self, module: NewModule) -> Result<Module, RepositoryError> {
        let row = sqlx::query_as::<_, ModuleRow>(
            r#"
            INSERT INTO modules (name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_active, created_at
            "#,
        )
        .bind(module.name())
        .bind(module.description())
        .bind(module.is_active())
        .bind(module.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.into_domain()
    }

    async fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<ModuleId>,
    ) -> Result<bool, RepositoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM modules
                WHERE LOWER(name) = LOWER($1)
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id.map(|id| id.as_i64()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: ModuleId) -> Result<Option<Module>, RepositoryError> {
        let row = sqlx::query_as::<_, ModuleRow>(
            r#"
            SELECT id, name, description, is_active, created_at
            FROM modules
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ModuleRow::into_domain).transpose()
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::ConstraintViolation(
                db_err.constraint().unwrap_or("unique").to_string(),
            )
        }
        _ => RepositoryError::Database(err),
    }
}

#[derive(sqlx::FromRow)]
struct ModuleRow {
    id: i64,
    name: String,
    description: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ModuleRow {
    fn into_domain(self) -> Result<Module, RepositoryError> {
        let id = ModuleId::new(self.id)
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;

        Ok(Module::reconstruct(
            id,
            self.name,
            self.description,
            self.is_active,
            self.created_at,
        ))
    }
}
