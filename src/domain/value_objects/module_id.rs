use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// System-assigned identifier of a module, always a positive integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "i64", into = "i64")]
#[schema(value_type = i64)]
pub struct ModuleId(i64);

impl ModuleId {
    /// The first identifier handed out by a fresh store
    pub const FIRST: ModuleId = ModuleId(1);

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidModuleId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<i64> for ModuleId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for i64 {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModuleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidModuleId(s.to_string()))?;
        Self::new(value)
    }
}
