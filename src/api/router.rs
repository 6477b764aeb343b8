use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::SearchService;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub service: Arc<SearchService>,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Index administration
        .route("/v1/indices/:index", put(create_index).get(inspect_index))
        .route("/v1/indices/:index/_reset", post(reset_index))
        // Documents
        .route("/v1/indices/:index/documents", post(put_document))
        .route("/v1/indices/:index/documents/:id", get(get_document))
        // Search
        .route("/v1/indices/:index/_search", post(search))
        // Health and metrics
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(capacity: usize) -> Router {
        let service = SearchService::new(ServiceConfig::default().with_capacity(capacity)).unwrap();
        create_router(AppState {
            service: Arc::new(service),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_capacity_exhaustion_is_insufficient_storage() {
        let app = app(1);
        let (status, _) = send(&app, Method::PUT, "/v1/indices/first", None).await;
        assert_eq!(status, StatusCode::CREATED);

        // Re-creating an existing index still succeeds
        let (status, _) = send(&app, Method::PUT, "/v1/indices/first", None).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::PUT, "/v1/indices/second", None).await;
        assert_eq!(status, StatusCode::INSUFFICIENT_STORAGE);
        assert_eq!(body["error"], "capacity_exceeded");

        // Auto-create through a put hits the same bound
        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/indices/third/documents",
            Some(json!({"id": "1", "keywords": {"k": "v"}})),
        )
        .await;
        assert_eq!(status, StatusCode::INSUFFICIENT_STORAGE);
        assert_eq!(body["error"], "capacity_exceeded");
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_bad_request() {
        let app = app(4);
        send(
            &app,
            Method::POST,
            "/v1/indices/books/documents",
            Some(json!({"id": "1", "keywords": {"title": "Rust"}})),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/indices/books/_search",
            Some(json!({"query": {"ands": {"title": "(unclosed"}}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_pattern");
    }

    #[tokio::test]
    async fn test_empty_document_id_is_bad_request() {
        let app = app(4);
        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/indices/books/documents",
            Some(json!({"id": "", "keywords": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_request");
    }

    #[tokio::test]
    async fn test_reset_unknown_index_is_not_found() {
        let app = app(4);
        let (status, body) = send(&app, Method::POST, "/v1/indices/ghost/_reset", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "index_not_found");

        send(&app, Method::PUT, "/v1/indices/real", None).await;
        let (status, body) = send(&app, Method::POST, "/v1/indices/real/_reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_search_unknown_index_returns_empty_page() {
        let app = app(4);
        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/indices/ghost/_search",
            Some(json!({"query": {}, "from": 0, "size": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hits"]["total"], 0);
        assert_eq!(body["hits"]["hits"], json!([]));

        // Querying does not allocate the index
        let (_, body) = send(&app, Method::GET, "/v1/indices/ghost", None).await;
        assert_eq!(body["exists"], false);
    }

    #[tokio::test]
    async fn test_put_then_search_and_get() {
        let app = app(4);
        for (id, title) in [("1", "Programming Rust"), ("2", "Fluent Python")] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/v1/indices/books/documents",
                Some(json!({"id": id, "keywords": {"title": title}, "source": {"pages": 700}})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["id"], id);
        }

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/indices/books/_search",
            Some(json!({"query": {"ands": {"title": "Rust"}}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hits"]["total"], 1);
        assert_eq!(body["hits"]["size"], 10);
        assert_eq!(body["hits"]["hits"][0]["_id"], "1");
        assert_eq!(body["hits"]["hits"][0]["_source"]["pages"], 700);
        assert_eq!(body["hits"]["hits"][0]["_source"]["title"], "Programming Rust");

        let (status, body) = send(&app, Method::GET, "/v1/indices/books/documents/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_keywords"]["title"], "Fluent Python");

        let (status, body) = send(&app, Method::GET, "/v1/indices/books/documents/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, body) = send(&app, Method::GET, "/v1/indices/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document_count"], 2);
    }

    #[tokio::test]
    async fn test_health_and_metrics() {
        let app = app(4);
        send(&app, Method::PUT, "/v1/indices/a", None).await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["indices"], 1);

        let response = app
            .clone()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("rummage_indices_created_total"));
    }
}
