use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use chrono::Utc;
use serde_json::Value;

use crate::api::handlers::{create_module_handler, get_module_handler};
use crate::api::middleware::{RequestId, ValidatedJson};
use crate::application::dto::ModuleRequest;
use crate::application::ports::{MockModuleRepository, RepositoryError};
use crate::application::use_cases::{CreateModuleUseCase, GetModuleUseCase};
use crate::domain::entities::Module;
use crate::domain::value_objects::ModuleId;

fn request_id() -> RequestId {
    RequestId::parse("handler-test").unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn stored(id: i64, name: &str) -> Module {
    Module::reconstruct(
        ModuleId::new(id).unwrap(),
        name.to_string(),
        String::new(),
        true,
        Utc::now(),
    )
}

#[tokio::test]
async fn test_create_sets_location_and_envelope() {
    let mut repo = MockModuleRepository::new();
    repo.expect_name_exists().returning(|_, _| Ok(false));
    repo.expect_create()
        .returning(|new_module| Ok(new_module.into_module(ModuleId::new(7).unwrap())));

    let use_case = Arc::new(CreateModuleUseCase::new(Arc::new(repo)));
    let request = ModuleRequest {
        name: Some("Billing".to_string()),
        description: Some("Invoices".to_string()),
        is_active: true,
    };

    let response =
        create_module_handler(State(use_case), request_id(), ValidatedJson(request)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/v1/modules/7");

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Resource created successfully");
    assert_eq!(body["data"]["id"], 7);
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(body["meta"]["requestId"], "handler-test");
}

#[tokio::test]
async fn test_create_duplicate_is_conflict() {
    let mut repo = MockModuleRepository::new();
    repo.expect_name_exists().returning(|_, _| Ok(true));
    repo.expect_create().never();

    let use_case = Arc::new(CreateModuleUseCase::new(Arc::new(repo)));
    let request = ModuleRequest {
        name: Some("Billing".to_string()),
        ..Default::default()
    };

    let response =
        create_module_handler(State(use_case), request_id(), ValidatedJson(request)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(response.headers().get(header::LOCATION).is_none());

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_CONFLICT");
    assert!(body["error"].get("details").is_none());
}

#[tokio::test]
async fn test_create_storage_fault_is_opaque_500() {
    let mut repo = MockModuleRepository::new();
    repo.expect_name_exists()
        .returning(|_, _| Err(RepositoryError::Internal("connection reset".to_string())));

    let use_case = Arc::new(CreateModuleUseCase::new(Arc::new(repo)));
    let request = ModuleRequest {
        name: Some("Billing".to_string()),
        ..Default::default()
    };

    let response =
        create_module_handler(State(use_case), request_id(), ValidatedJson(request)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(!body.to_string().contains("connection reset"));
}

#[tokio::test]
async fn test_get_existing_module() {
    let mut repo = MockModuleRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(stored(id.as_i64(), "Billing"))));

    let use_case = Arc::new(GetModuleUseCase::new(Arc::new(repo)));
    let response =
        get_module_handler(State(use_case), request_id(), Ok(Path("3".to_string()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Operation completed successfully");
    assert_eq!(body["data"]["id"], 3);
    assert_eq!(body["data"]["name"], "Billing");
}

#[tokio::test]
async fn test_get_missing_module_is_404() {
    let mut repo = MockModuleRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let use_case = Arc::new(GetModuleUseCase::new(Arc::new(repo)));
    let response =
        get_module_handler(State(use_case), request_id(), Ok(Path("999".to_string()))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_malformed_id_skips_repository() {
    let mut repo = MockModuleRepository::new();
    repo.expect_find_by_id().never();

    let use_case = Arc::new(GetModuleUseCase::new(Arc::new(repo)));
    let response =
        get_module_handler(State(use_case), request_id(), Ok(Path("abc".to_string()))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["id"].is_array());
}
