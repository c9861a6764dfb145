//! Business rules for module creation
//!
//! Lengths are counted in characters, not bytes.

use crate::application::errors::ModuleError;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Trim the name and check it is present and within bounds.
///
/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<&str, ModuleError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModuleError::NameRequired);
    }

    let len = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ModuleError::NameLength);
    }

    Ok(trimmed)
}

pub fn validate_description(description: &str) -> Result<(), ModuleError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ModuleError::DescriptionLength);
    }
    Ok(())
}
