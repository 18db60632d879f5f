//! HTTP server for the message service.
//!
//! Provides endpoints for:
//! - Chat replies (`{prefix}/messages`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    // CORS layer for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new().route("/messages", post(handlers::post_message));

    let prefix = config.normalized_prefix();
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&prefix, api)
    };

    router
        // Observability routes
        .route("/health", get(handlers::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::service::ReplyIdSource;

    struct FixedId(u64);

    impl ReplyIdSource for FixedId {
        fn next_id(&self) -> u64 {
            self.0
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("parse JSON")
    }

    #[tokio::test]
    async fn test_post_message_ping() {
        let app = create_router(
            AppState::with_ids(Arc::new(FixedId(12))),
            &ServerConfig::default(),
        );

        let resp = app
            .oneshot(post_json(
                "/api/messages",
                r#"{"message":{"id":1,"type":"user","content":"ping"}}"#,
            ))
            .await
            .expect("request");

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({
                "id": 12,
                "type": "bot",
                "content": "Hello World, Human! This is a reply for your message: ping"
            })
        );
    }

    #[tokio::test]
    async fn test_post_message_only_needs_content() {
        let app = create_router(AppState::new(), &ServerConfig::default());

        let resp = app
            .oneshot(post_json("/api/messages", r#"{"message":{"content":"hi","file":{}}}"#))
            .await
            .expect("request");

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert!(json["id"].as_u64().unwrap() < 1000);
        assert_eq!(json["type"], "bot");
    }

    #[tokio::test]
    async fn test_post_message_ignores_unexpected_id_and_type() {
        let app = create_router(
            AppState::with_ids(Arc::new(FixedId(4))),
            &ServerConfig::default(),
        );

        for body in [
            r#"{"message":{"id":-1,"type":"system","content":"x"}}"#,
            r#"{"message":{"id":1.5,"type":"user","content":"x"}}"#,
            r#"{"message":{"id":"abc","type":7,"content":"x"}}"#,
            r#"{"message":{"id":null,"type":null,"content":"x"}}"#,
        ] {
            let resp = app
                .clone()
                .oneshot(post_json("/api/messages", body))
                .await
                .expect("request");

            assert_eq!(resp.status(), StatusCode::OK, "body: {}", body);
            let json = body_json(resp).await;
            assert_eq!(json["id"], 4);
            assert_eq!(json["type"], "bot");
            assert_eq!(
                json["content"],
                "Hello World, Human! This is a reply for your message: x"
            );
        }
    }

    #[tokio::test]
    async fn test_post_message_rejects_card_content() {
        let app = create_router(AppState::new(), &ServerConfig::default());

        let resp = app
            .oneshot(post_json(
                "/api/messages",
                r#"{"message":{"id":1,"type":"user","content":{"title":"t","description":"d","items":[]}}}"#,
            ))
            .await
            .expect("request");

        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_post_message_rejects_malformed_json() {
        let app = create_router(AppState::new(), &ServerConfig::default());

        let resp = app
            .oneshot(post_json("/api/messages", "{not json"))
            .await
            .expect("request");

        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_root_prefix() {
        let config = ServerConfig {
            path_prefix: "/".into(),
            ..ServerConfig::default()
        };
        let app = create_router(AppState::new(), &config);

        let resp = app
            .oneshot(post_json("/messages", r#"{"message":{"content":"x"}}"#))
            .await
            .expect("request");

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(AppState::new(), &ServerConfig::default());

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.expect("request");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!({ "status": "ok" }));
    }
}
