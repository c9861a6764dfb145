use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_objects::ModuleId;

/// A module that passed business validation but has no identifier yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl NewModule {
    /// Stamp `created_at` with the current time.
    ///
    /// Truncated to microseconds so the in-memory and PostgreSQL stores keep the
    /// same precision.
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Attach the identifier assigned by the repository
    pub fn into_module(self, id: ModuleId) -> Module {
        Module {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Module entity - a persisted module record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Module {
    /// Reconstruct from storage
    pub fn reconstruct(
        id: ModuleId,
        name: String,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
