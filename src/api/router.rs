use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::v1;

/// Create the router with application state.
///
/// Request ids are assigned before tracing and logging run, and echoed back
/// on the response.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::llm::MockCompletionClient;
    use crate::domain::{FoodItem, Order};
    use crate::infrastructure::attachment::InMemoryAttachmentStore;
    use crate::infrastructure::catalog::StorageCatalogRepository;
    use crate::infrastructure::services::{AssistantService, AssistantSettings};
    use crate::infrastructure::storage::InMemoryStorage;

    fn router() -> Router {
        let catalog = Arc::new(StorageCatalogRepository::new(
            Arc::new(InMemoryStorage::<FoodItem>::new()),
            Arc::new(InMemoryStorage::<Order>::new()),
        ));
        let assistant = AssistantService::new(
            Arc::new(MockCompletionClient::new()),
            catalog,
            Arc::new(InMemoryAttachmentStore::new()),
            AssistantSettings::default(),
        );

        create_router(AppState::new(Arc::new(assistant)), 64)
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_live() {
        let response = router()
            .oneshot(Request::get("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_body_limit() {
        let body = format!(r#"{{"query":"{}"}}"#, "a".repeat(200));
        let response = router()
            .oneshot(
                Request::post("/v1/query")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = router()
            .oneshot(Request::get("/v1/chat/completions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
