use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::validation::{NAME_MAX_CHARS, NAME_MIN_CHARS};
use crate::domain::{entities::Module, value_objects::ModuleId};

/// DTO for module creation requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRequest {
    /// Unique module name (3-50 characters, case-insensitive)
    #[validate(
        required(message = "This field is required"),
        custom(function = "validate_name_length")
    )]
    #[schema(min_length = 3, max_length = 50, example = "Inventory")]
    pub name: Option<String>,

    /// Free-form description (up to 200 characters)
    #[validate(length(max = 200, message = "Value exceeds maximum length"))]
    #[schema(max_length = 200)]
    pub description: Option<String>,

    /// Defaults to false when omitted
    #[serde(default)]
    pub is_active: bool,
}

fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(ValidationError::new("min").with_message(Cow::Borrowed("Value is too short")));
    }
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::new("max")
            .with_message(Cow::Borrowed("Value exceeds maximum length")));
    }
    Ok(())
}

/// DTO for module responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub id: ModuleId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Module> for ModuleResponse {
    fn from(module: Module) -> Self {
        Self {
            id: module.id(),
            name: module.name().to_string(),
            description: module.description().to_string(),
            is_active: module.is_active(),
            created_at: module.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, description: Option<&str>) -> ModuleRequest {
        ModuleRequest {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active: false,
        }
    }

    #[test]
    fn test_request_defaults_when_fields_omitted() {
        let request: ModuleRequest = serde_json::from_str(r#"{"name": "Inventory"}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Inventory"));
        assert_eq!(request.description, None);
        assert!(!request.is_active);
    }

    #[test]
    fn test_request_reads_camel_case() {
        let request: ModuleRequest =
            serde_json::from_str(r#"{"name": "Inventory", "isActive": true}"#).unwrap();
        assert!(request.is_active);
    }

    #[test]
    fn test_missing_name_is_required_error() {
        let errors = request(None, None).validate().unwrap_err();
        let fields = errors.field_errors();
        let name_errors = fields["name"];

        assert_eq!(name_errors.len(), 1);
        assert_eq!(name_errors[0].code, "required");
    }

    #[test]
    fn test_name_length_codes() {
        let errors = request(Some("In"), None).validate().unwrap_err();
        assert_eq!(errors.field_errors()["name"][0].code, "min");

        let long = "n".repeat(51);
        let errors = request(Some(&long), None).validate().unwrap_err();
        assert_eq!(errors.field_errors()["name"][0].code, "max");

        assert!(request(Some("Inv"), None).validate().is_ok());
        assert!(request(Some(&"n".repeat(50)), None).validate().is_ok());
    }

    #[test]
    fn test_all_field_violations_collected() {
        let description = "d".repeat(201);
        let errors = request(Some("In"), Some(&description)).validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let module = crate::domain::entities::NewModule::new("Inventory", "Stock", true)
            .into_module(ModuleId::new(1).unwrap());
        let json = serde_json::to_value(ModuleResponse::from(module)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Inventory");
        assert_eq!(json["isActive"], true);
        assert!(json["createdAt"].is_string());
    }
}
