//! Axum router configuration with middleware.
//!
//! Frontend routes live under `/api/`; `/health` sits at the root.
//! Middleware: CORS (any origin) and request tracing.

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/check-user", get(handlers::check_user::check_user))
        .route("/pair", get(handlers::pair::pair))
        .route("/sessions", get(handlers::sessions::get_sessions));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness plus whether an upstream is configured.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_configured": state.gateway.is_upstream_configured(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use pairgate_types::config::{ServerConfig, UpstreamConfig};
    use serde_json::json;
    use tower::ServiceExt;

    fn router_with_upstream(base_url: Option<String>) -> Router {
        let config = ServerConfig {
            upstream: UpstreamConfig {
                base_url,
                timeout_secs: 2,
                ..UpstreamConfig::default()
            },
            ..ServerConfig::default()
        };
        build_router(AppState::init(&config).unwrap())
    }

    struct Reply {
        status: StatusCode,
        headers: axum::http::HeaderMap,
        body: serde_json::Value,
    }

    async fn get_json(router: Router, uri: &str) -> Reply {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        Reply {
            status,
            headers,
            body: serde_json::from_slice(&bytes).unwrap(),
        }
    }

    // --- /health ---

    #[tokio::test]
    async fn health_reports_upstream_configuration() {
        let reply = get_json(router_with_upstream(None), "/health").await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["status"], "ok");
        assert_eq!(reply.body["upstream_configured"], false);

        let reply = get_json(
            router_with_upstream(Some("http://127.0.0.1:1".into())),
            "/health",
        )
        .await;
        assert_eq!(reply.body["upstream_configured"], true);
    }

    // --- /api/check-user ---

    #[tokio::test]
    async fn check_user_with_phone_number_is_verified() {
        let reply = get_json(
            router_with_upstream(None),
            "/api/check-user?phoneNumber=%2B15550100",
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(
            reply.body,
            json!({ "verified": true, "phoneNumber": "+15550100" })
        );
    }

    #[tokio::test]
    async fn check_user_without_phone_number_is_bad_request() {
        for uri in ["/api/check-user", "/api/check-user?phoneNumber="] {
            let reply = get_json(router_with_upstream(None), uri).await;
            assert_eq!(reply.status, StatusCode::BAD_REQUEST);
            assert_eq!(
                reply.body,
                json!({ "verified": false, "message": "Phone number is required" })
            );
        }
    }

    #[tokio::test]
    async fn check_user_repeated_phone_number_uses_first() {
        let reply = get_json(
            router_with_upstream(None),
            "/api/check-user?phoneNumber=123&phoneNumber=456",
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, json!({ "verified": true, "phoneNumber": "123" }));
    }

    // --- /api/pair ---

    #[tokio::test]
    async fn pair_without_number_is_bad_request_even_unconfigured() {
        let reply = get_json(router_with_upstream(None), "/api/pair").await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            reply.body,
            json!({
                "success": false,
                "message": "Phone number is required (use ?number=...)"
            })
        );
    }

    #[tokio::test]
    async fn pair_unconfigured_is_server_error() {
        let reply = get_json(router_with_upstream(None), "/api/pair?number=123").await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body,
            json!({
                "success": false,
                "message": "Upstream API not configured (NEXT_PUBLIC_API)"
            })
        );
    }

    #[tokio::test]
    async fn pair_passes_upstream_body_and_status_through() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/pair")
                    .query_param("number", "+15550100");
                then.status(201)
                    .header("content-type", "application/json")
                    .body(json!({ "code": "WXYZ-9876", "expires_in": 60 }).to_string());
            })
            .await;

        let reply = get_json(
            router_with_upstream(Some(server.base_url())),
            "/api/pair?number=%2B15550100",
        )
        .await;
        mock.assert_async().await;

        assert_eq!(reply.status, StatusCode::CREATED);
        assert_eq!(reply.body, json!({ "code": "WXYZ-9876", "expires_in": 60 }));
    }

    #[tokio::test]
    async fn pair_passes_upstream_error_status_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/pair");
                then.status(400)
                    .header("content-type", "application/json")
                    .body(json!({ "success": false, "message": "invalid number" }).to_string());
            })
            .await;

        let reply = get_json(
            router_with_upstream(Some(server.base_url())),
            "/api/pair?number=abc",
        )
        .await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body["message"], "invalid number");
    }

    #[tokio::test]
    async fn pair_repeated_number_uses_first() {
        let reply = get_json(router_with_upstream(None), "/api/pair?number=1&number=2").await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body["message"],
            "Upstream API not configured (NEXT_PUBLIC_API)"
        );

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/pair").query_param("number", "1");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(json!({ "code": "FIRST" }).to_string());
            })
            .await;

        let reply = get_json(
            router_with_upstream(Some(server.base_url())),
            "/api/pair?number=1&number=2",
        )
        .await;
        mock.assert_async().await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, json!({ "code": "FIRST" }));
    }

    #[tokio::test]
    async fn pair_unreachable_upstream_is_bad_gateway() {
        let reply = get_json(
            router_with_upstream(Some("http://127.0.0.1:1".into())),
            "/api/pair?number=123",
        )
        .await;
        assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            reply.body,
            json!({ "success": false, "message": "Failed to connect to pairing service" })
        );
    }

    // --- /api/sessions ---

    fn assert_no_cache(headers: &axum::http::HeaderMap) {
        let cache_control = headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        for directive in ["no-store", "no-cache", "must-revalidate"] {
            assert!(cache_control.contains(directive), "missing {directive}");
        }
        assert_eq!(headers.get(header::PRAGMA).unwrap(), "no-cache");
        assert_eq!(headers.get(header::EXPIRES).unwrap(), "0");
    }

    #[tokio::test]
    async fn sessions_republishes_upstream_total() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sessions");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(json!({ "total": 7, "healthy": 7, "sessions": {} }).to_string());
            })
            .await;

        let reply = get_json(router_with_upstream(Some(server.base_url())), "/api/sessions").await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["total"], 7);
        assert_eq!(reply.body["breakdown"], json!({ "api": 7 }));
        let timestamp = reply.body["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'));
        assert_no_cache(&reply.headers);
    }

    #[tokio::test]
    async fn sessions_total_kept_when_unused_fields_are_odd() {
        let bodies = [
            json!({ "total": 7, "sessions": [] }),
            json!({
                "total": 7,
                "healthy": null,
                "sessions": { "a": { "connected": null, "user": null, "jid": 5, "healthy": "yes" } }
            }),
            json!({ "total": 7.0 }),
            json!({ "total": 7, "healthy": -1 }),
        ];

        for body in bodies {
            let server = MockServer::start_async().await;
            let payload = body.to_string();
            server
                .mock_async(move |when, then| {
                    when.method(GET).path("/sessions");
                    then.status(200)
                        .header("content-type", "application/json")
                        .body(payload);
                })
                .await;

            let reply =
                get_json(router_with_upstream(Some(server.base_url())), "/api/sessions").await;
            assert_eq!(reply.status, StatusCode::OK);
            assert_eq!(reply.body["total"], 7, "upstream body {body}");
            assert_eq!(reply.body["breakdown"], json!({ "api": 7 }));
        }
    }

    #[tokio::test]
    async fn sessions_unreachable_upstream_reports_zero() {
        let reply = get_json(
            router_with_upstream(Some("http://127.0.0.1:1".into())),
            "/api/sessions",
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["total"], 0);
        assert_eq!(reply.body["breakdown"], json!({ "api": 0 }));
        assert!(reply.body["timestamp"].is_string());
        assert_no_cache(&reply.headers);
    }

    #[tokio::test]
    async fn sessions_upstream_error_status_reports_zero() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sessions");
                then.status(500).body("boom");
            })
            .await;

        let reply = get_json(router_with_upstream(Some(server.base_url())), "/api/sessions").await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["total"], 0);
    }

    #[tokio::test]
    async fn sessions_unconfigured_is_server_error() {
        let reply = get_json(router_with_upstream(None), "/api/sessions").await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body,
            json!({
                "status": "error",
                "message": "Upstream API not configured (NEXT_PUBLIC_API)"
            })
        );
    }
}
