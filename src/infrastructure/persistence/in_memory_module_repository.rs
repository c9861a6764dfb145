use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::application::ports::{ModuleRepository, RepositoryError};
use crate::domain::entities::{Module, NewModule};
use crate::domain::value_objects::ModuleId;

/// Mirrors the unique index on `LOWER(name)` in the PostgreSQL schema
const NAME_CONSTRAINT: &str = "modules_name_lower_key";

struct ModuleStore {
    modules: HashMap<ModuleId, Module>,
    next_id: ModuleId,
}

impl ModuleStore {
    fn contains_name(&self, wanted: &str, exclude_id: Option<ModuleId>) -> bool {
        self.modules
            .values()
            .filter(|module| Some(module.id()) != exclude_id)
            .any(|module| module.name().to_lowercase() == wanted)
    }
}

/// Process-local module repository.
///
/// One lock covers both the map and the id counter and is held for the whole
/// of every call.
pub struct InMemoryModuleRepository {
    store: Mutex<ModuleStore>,
}

impl InMemoryModuleRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(ModuleStore {
                modules: HashMap::new(),
                next_id: ModuleId::FIRST,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.store.lock().modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryModuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleRepository for InMemoryModuleRepository {
    async fn create(&self, module: NewModule) -> Result<Module, RepositoryError> {
        let mut store = self.store.lock();

        if store.contains_name(&module.name().to_lowercase(), None) {
            return Err(RepositoryError::ConstraintViolation(
                NAME_CONSTRAINT.to_string(),
            ));
        }

        let id = store.next_id;
        store.next_id = id.next();

        let module = module.into_module(id);
        store.modules.insert(id, module.clone());
        Ok(module)
    }

    async fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<ModuleId>,
    ) -> Result<bool, RepositoryError> {
        let store = self.store.lock();

        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Ok(false);
        }

        Ok(store.contains_name(&wanted, exclude_id))
    }

    async fn find_by_id(&self, id: ModuleId) -> Result<Option<Module>, RepositoryError> {
        let store = self.store.lock();
        Ok(store.modules.get(&id).cloned())
    }
}
