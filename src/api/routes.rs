/*
 * Responsibility
 * - URL structure of the template
 * - /ping is literal and wins over the catch-all
 * - the catch-all is mounted on "/" as well, since {*path} needs at least one segment
 * - only GET is routed; other methods get axum's 405
 */
use axum::{Router, routing::get};

use crate::api::handlers::{catch_all::catch_all, ping::ping};

pub fn routes() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/", get(catch_all))
        .route("/{*path}", get(catch_all))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    const PONG_BODY: &str = r#"{"success":true,"message":"pong"}"#;
    const DEFAULT_BODY: &str = r#"{"success":true,"message":"Winter is Coming 🐺"}"#;

    async fn send(method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = routes()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        (status, content_type, body)
    }

    async fn get_body(uri: &str) -> String {
        let (status, content_type, body) = send(Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert_eq!(content_type.as_deref(), Some("application/json"), "GET {uri}");
        String::from_utf8(body).unwrap()
    }

    #[tokio::test]
    async fn ping_returns_pong() {
        let body = get_body("/ping").await;

        assert_eq!(body, PONG_BODY);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, json!({"success": true, "message": "pong"}));
    }

    #[tokio::test]
    async fn ping_ignores_query_string() {
        assert_eq!(get_body("/ping?x=1").await, PONG_BODY);
    }

    #[tokio::test]
    async fn root_returns_default_message() {
        let body = get_body("/").await;

        assert_eq!(body, DEFAULT_BODY);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "Winter is Coming 🐺"})
        );
    }

    #[tokio::test]
    async fn any_other_path_returns_default_message() {
        for uri in [
            "/foo",
            "/foo/bar",
            "/a/b/c/d/e",
            "/health",
            "/pingpong",
            "/api/v1/users/42?page=2",
            "/caf%C3%A9/%F0%9F%90%BA",
            "/files/report.final.json",
        ] {
            assert_eq!(get_body(uri).await, DEFAULT_BODY, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn ping_match_is_exact_and_case_sensitive() {
        // Matching runs on the raw path, so a percent-encoded "ping" is not /ping.
        for uri in ["/ping/", "/PING", "/Ping", "/ping/extra", "/p%69ng"] {
            assert_eq!(get_body(uri).await, DEFAULT_BODY, "GET {uri}");
        }
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let first_ping = get_body("/ping").await;
        let first_other = get_body("/some/where").await;

        for _ in 0..5 {
            assert_eq!(get_body("/ping").await, first_ping);
            assert_eq!(get_body("/some/where").await, first_other);
        }
    }

    #[tokio::test]
    async fn head_is_served_by_get_routes() {
        let (status, _, body) = send(Method::HEAD, "/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        for (method, uri) in [
            (Method::POST, "/ping"),
            (Method::PUT, "/"),
            (Method::DELETE, "/foo/bar"),
            (Method::PATCH, "/ping/"),
        ] {
            let (status, _, _) = send(method.clone(), uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        }
    }
}
