//! # REST API for Admin Login

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info};

use crate::domain::commands::auth::AdminCredentials;
use crate::domain::AuthError;
use crate::io::rest::envelope::{ApiError, ApiJson, ApiResult};
use crate::AppState;
use shared::{AdminLoginRequest, ApiResponse};

const MISSING_CREDENTIALS: &str = "Email and password are required.";
const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
const LOGIN_FAILED: &str = "Login failed. Please try again later.";

/// Admin login route, mounted under `/api/admin`
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Check administrator credentials
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AdminLoginRequest>,
) -> ApiResult<()> {
    info!("POST /api/admin/login");

    let credentials = AdminCredentials {
        email: request.email.unwrap_or_default(),
        password: request.password.unwrap_or_default(),
    };

    match state.auth_provider.verify_credentials(&credentials).await {
        Ok(true) => Ok((StatusCode::OK, Json(ApiResponse::message("Login successful.")))),
        Ok(false) => Err(ApiError::new(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS)),
        Err(AuthError::MissingCredentials) => Err(ApiError::bad_request(MISSING_CREDENTIALS)),
        Err(err @ AuthError::Unavailable(_)) => {
            error!("{} Cause: {}", LOGIN_FAILED, err);
            Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{read_json, setup_test_state};
    use crate::domain::AuthProvider;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    struct OfflineProvider;

    #[async_trait]
    impl AuthProvider for OfflineProvider {
        async fn verify_credentials(&self, _: &AdminCredentials) -> Result<bool, AuthError> {
            Err(AuthError::Unavailable("directory timeout".to_string()))
        }
    }

    fn login_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_with_configured_credentials() {
        let (state, _db) = setup_test_state().await;
        let app = admin_router().with_state(state);

        let response = app
            .oneshot(login_request(json!({ "email": "admin@example.com", "password": "changeme123" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": true, "message": "Login successful." }));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let (state, _db) = setup_test_state().await;
        let app = admin_router().with_state(state);

        let response = app
            .oneshot(login_request(json!({ "email": "admin@example.com", "password": "guess" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_without_password() {
        let (state, _db) = setup_test_state().await;
        let app = admin_router().with_state(state);

        let response = app
            .oneshot(login_request(json!({ "email": "admin@example.com" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], MISSING_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_with_unavailable_provider() {
        let (mut state, _db) = setup_test_state().await;
        state.auth_provider = Arc::new(OfflineProvider);
        let app = admin_router().with_state(state);

        let response = app
            .oneshot(login_request(json!({ "email": "admin@example.com", "password": "changeme123" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": LOGIN_FAILED }));
    }
}
