//! Handler tests for Tasks domain
//!
//! These run the tasks router against the in-memory repository and check:
//! - Request deserialization and validation
//! - Response envelopes and HTTP status codes
//! - Error responses for bad ids, bad pagination and missing tasks

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_tasks::*;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(TaskService::new(InMemoryTaskRepository::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_create_task_returns_201() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", Some(json!({"title": "Buy milk"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Task created successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["title"], "Buy milk");
    assert!(body["data"]["description"].is_null());
    assert_eq!(body["data"]["status"], false);
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
}

#[tokio::test]
async fn test_create_task_validates_title() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", Some(json!({"title": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["data"].is_null());
    assert!(body["details"]["title"].is_array());
}

#[tokio::test]
async fn test_create_task_rejects_malformed_json() {
    let app = app();

    let (status, body) = send(&app, "POST", "/", Some(json!({"description": "no title"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_tasks_paginates() {
    let app = app();
    for title in ["first", "second", "third"] {
        send(&app, "POST", "/", Some(json!({"title": title}))).await;
    }

    let (status, body) = send(&app, "GET", "/?page=1&limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "List tasks successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["title"], "first");
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 2, "total": 3, "total_pages": 2})
    );

    let (_, body) = send(&app, "GET", "/?page=2&limit=2", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "third");
}

#[tokio::test]
async fn test_list_tasks_defaults_and_empty() {
    let app = app();

    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 10, "total": 0, "total_pages": 0})
    );
}

#[tokio::test]
async fn test_list_tasks_rejects_out_of_range_pagination() {
    let app = app();

    for uri in ["/?limit=0", "/?limit=101", "/?page=0", "/?page=abc"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["status"], "error", "uri: {uri}");
    }
}

#[tokio::test]
async fn test_list_tasks_rejects_page_beyond_offset_range() {
    let app = app();

    let (status, body) = send(&app, "GET", "/?page=100000000000000000&limit=100", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["page"].is_array());
}

#[tokio::test]
async fn test_list_tasks_last_allowed_page_is_empty() {
    let app = app();
    send(&app, "POST", "/", Some(json!({"title": "only"}))).await;

    let (status, body) = send(&app, "GET", "/?page=1000000000&limit=100", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_storage_failure_hides_driver_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom(
            "password authentication failed for user \"admin\" at 10.0.0.5".into(),
        )])
        .into_connection();
    let app = handlers::router(TaskService::new(PgTaskRepository::new(db)));

    let (status, body) = send(&app, "GET", "/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "DATABASE_ERROR");
    assert_eq!(body["message"], "Database error occurred");
    assert!(!body.to_string().contains("password"));
    assert!(!body.to_string().contains("10.0.0.5"));
}

#[tokio::test]
async fn test_get_task_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1004);
    assert_eq!(body["message"], "Task with id 999 not found");
}

#[tokio::test]
async fn test_get_task_rejects_invalid_ids() {
    let app = app();

    for uri in ["/abc", "/-1", "/1.5"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["error"], "INVALID_ID", "uri: {uri}");
    }
}

#[tokio::test]
async fn test_update_task_replaces_fields_and_keeps_created_at() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/",
        Some(json!({"title": "Draft", "description": "first pass"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/1",
        Some(json!({"title": "Final", "status": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["title"], "Final");
    assert_eq!(body["data"]["status"], true);
    assert!(body["data"]["description"].is_null());
    assert_eq!(body["data"]["createdAt"], created["data"]["createdAt"]);

    let (_, fetched) = send(&app, "GET", "/1", None).await;
    assert_eq!(fetched["data"]["title"], "Final");
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/42", Some(json!({"title": "Ghost"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_hides_it() {
    let app = app();
    send(&app, "POST", "/", Some(json!({"title": "Temporary"}))).await;

    let (status, body) = send(&app, "DELETE", "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");
    assert!(body["data"].is_null());

    let (status, _) = send(&app, "GET", "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}
