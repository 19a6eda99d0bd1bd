//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the login/logout router, meant to be nested under `/api`
pub fn auth_router(config: Arc<GateConfig>) -> Router {
    let state = AuthAppState { config };

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use tower::ServiceExt;

    fn router(password: Option<&str>) -> Router {
        let mut config = GateConfig::development();
        if let Some(password) = password {
            config = config.with_viewer_password(password);
        }
        auth_router(Arc::new(config))
    }

    fn post_login(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie() {
        let response = router(Some("letmein"))
            .oneshot(post_login(r#"{"password":"letmein"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("mktdash_session=ok"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=43200"));
        assert_eq!(json(response).await, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let response = router(Some("letmein"))
            .oneshot(post_login(r#"{"password":"guess"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(
            json(response).await,
            serde_json::json!({ "error": "Invalid password" })
        );
    }

    #[tokio::test]
    async fn test_login_without_configured_password() {
        let response = router(None)
            .oneshot(post_login(r#"{"password":"letmein"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(
            json(response).await,
            serde_json::json!({ "error": "VIEWER_PASSWORD not set" })
        );
    }

    #[tokio::test]
    async fn test_login_malformed_body_is_empty_password() {
        let response = router(Some("letmein"))
            .oneshot(post_login("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let request = Request::builder()
            .method("POST")
            .uri("/logout")
            .header(header::COOKIE, "mktdash_session=ok")
            .body(Body::empty())
            .unwrap();

        let response = router(Some("letmein")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("mktdash_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert_eq!(json(response).await, serde_json::json!({ "ok": true }));
    }
}
