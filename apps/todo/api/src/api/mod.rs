use axum::Router;
use domain_events::{EventService, PgEventRepository};
use domain_tasks::{PgTaskRepository, TaskService};

pub mod health;

/// Creates the resource routes without the `/v1` prefix.
/// The prefix is added by `axum_helpers::create_router`.
///
/// Returns a stateless Router (every sub-router has its state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    let tasks = TaskService::new(PgTaskRepository::new(state.db.clone()));
    let events = EventService::new(PgEventRepository::new(state.db.clone()));

    Router::new()
        .nest("/tasks", domain_tasks::handlers::router(tasks))
        .nest("/events", domain_events::handlers::router(events))
}

/// Router with the `/ready` endpoint, which checks the database.
///
/// Mounted at the root next to `/healthz`, outside the `/v1` prefix.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            app: app_info!(),
            database: PostgresConfig::new("postgres://localhost/todo"),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
            run_migrations: false,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = AppState { config, db };

        let probes = health_router(state.config.app).merge(ready_router(state.clone()));
        create_router::<ApiDoc>(routes(&state), probes, &state.config.cors).unwrap()
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_probes_live_at_root() {
        let (status, body) = get(app(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "todo_api");

        let (status, body) = get(app(), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_resources_are_versioned() {
        let (status, body) = get(app(), "/v1/tasks/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ID");

        let (status, body) = get(app(), "/v1/events/-5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ID");

        let (status, body) = get(app(), "/tasks").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_lists_both_resources() {
        let (status, doc) = get(app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let paths = doc["paths"].as_object().unwrap();
        for path in ["/v1/tasks", "/v1/tasks/{id}", "/v1/events", "/v1/events/{id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
