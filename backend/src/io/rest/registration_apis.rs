//! # REST API for Registrations
//!
//! Public registration intake, the admin listing and the CSV download.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::io::rest::envelope::{ApiError, ApiJson, ApiResult};
use crate::io::rest::mappers::registration_mapper::RegistrationMapper;
use crate::AppState;
use shared::{ApiResponse, CreateRegistrationRequest, Registration, RegistrationWithCourse};

const EXPORT_FAILED: &str = "Failed to export registrations.";
const EXPORT_FILENAME: &str = "registrations.csv";

/// Public registration routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(create_registration))
}

/// Admin registration routes, mounted under `/api/admin`
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/registrations", get(list_registrations))
        .route("/registrations/export", get(export_registrations_csv))
}

/// Register a learner for a course
pub async fn create_registration(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateRegistrationRequest>,
) -> ApiResult<Registration> {
    info!("POST /api/register");

    let registration = state
        .registration_service
        .create_registration(RegistrationMapper::to_create_command(request))
        .await
        .map_err(|e| {
            ApiError::from_domain(
                e,
                "Something went wrong while saving the registration. Please try again later.",
            )
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            RegistrationMapper::to_dto(registration),
            "Registration saved successfully.",
        )),
    ))
}

/// List every registration with its course, newest first
pub async fn list_registrations(
    State(state): State<AppState>,
) -> ApiResult<Vec<RegistrationWithCourse>> {
    info!("GET /api/admin/registrations");

    let listings = state
        .registration_service
        .list_registrations()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to load registrations."))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(RegistrationMapper::to_listing_dto_list(listings))),
    ))
}

/// Download every registration as a CSV attachment.
///
/// Answers `204 No Content` when there is nothing to export.
pub async fn export_registrations_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    info!("GET /api/admin/registrations/export");

    let listings = state
        .registration_service
        .list_registrations()
        .await
        .map_err(|e| ApiError::from_domain(e, EXPORT_FAILED))?;

    let csv = state
        .export_service
        .export_registrations_to_csv(&listings)
        .map_err(|e| ApiError::from_domain(e.into(), EXPORT_FAILED))?;

    match csv {
        Some(body) => Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
                ),
            ],
            body,
        )
            .into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::course_apis;
    use crate::test_utils::{read_json, setup_test_state};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new()
            .merge(router())
            .nest("/admin", admin_router().merge(course_apis::admin_router()))
            .with_state(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn create_course(app: &Router, title: &str, slug: &str) -> i64 {
        let body = json!({
            "title": title,
            "slug": slug,
            "category": "Programming",
            "description": "Intro",
            "duration": "4 weeks",
            "schedule": "Mondays",
            "location": "Room 1",
            "trainer": "Alex Kim"
        });
        let response = app.clone().oneshot(post_json("/admin/courses", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await["data"]["id"].as_i64().unwrap()
    }

    fn registration_body(full_name: &str, email: &str, course_id: Value) -> Value {
        json!({
            "fullName": full_name,
            "email": email,
            "phone": "+1 555 0100",
            "courseId": course_id
        })
    }

    #[tokio::test]
    async fn test_register_for_existing_course() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);
        let course_id = create_course(&app, "Rust Basics", "rust-basics").await;

        let response = app
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!(course_id))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration saved successfully.");
        assert_eq!(body["data"]["courseId"], course_id);
        assert_eq!(body["data"]["fullName"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_register_with_invalid_email() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);
        let course_id = create_course(&app, "Rust Basics", "rust-basics").await;

        let response = app
            .oneshot(post_json("/register", registration_body("Jane Doe", "not-an-email", json!(course_id))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "Please provide a valid email address." }));
    }

    #[tokio::test]
    async fn test_register_with_string_course_id() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);
        create_course(&app, "Rust Basics", "rust-basics").await;

        let response = app
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!("1"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Missing or invalid fields."));
    }

    #[tokio::test]
    async fn test_register_for_unknown_course() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);

        let response = app
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!(42))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Selected course does not exist.");
    }

    #[tokio::test]
    async fn test_list_registrations_includes_course() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);
        let course_id = create_course(&app, "Rust Basics", "rust-basics").await;
        app.clone()
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!(course_id))))
            .await
            .unwrap();

        let response = app
            .oneshot(Request::get("/admin/registrations").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["email"], "jane@example.com");
        assert_eq!(rows[0]["course"], json!({ "id": course_id, "title": "Rust Basics" }));
    }

    #[tokio::test]
    async fn test_export_without_registrations_is_no_content() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);

        let response = app
            .oneshot(Request::get("/admin/registrations/export").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_export_returns_csv_attachment() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);
        let course_id = create_course(&app, "Rust, Advanced", "rust-advanced").await;
        app.clone()
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!(course_id))))
            .await
            .unwrap();

        let response = app
            .oneshot(Request::get("/admin/registrations/export").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"registrations.csv\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], "Course title,Full name,Email,Phone,Registration date");
        assert!(lines[1].starts_with("\"Rust, Advanced\",Jane Doe,jane@example.com,+1 555 0100,"));
    }

    #[tokio::test]
    async fn test_register_with_invalid_json() {
        let (state, _db) = setup_test_state().await;
        let app = app(state);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from("{\"fullName\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "Invalid JSON in request body." }));
    }

    #[tokio::test]
    async fn test_register_storage_failure_returns_generic_500() {
        let (state, db) = setup_test_state().await;
        let app = app(state);
        db.pool().close().await;

        let response = app
            .oneshot(post_json("/register", registration_body("Jane Doe", "jane@example.com", json!(1))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Something went wrong while saving the registration. Please try again later."
            })
        );
    }

    #[tokio::test]
    async fn test_list_and_export_storage_failure_return_generic_500() {
        let (state, db) = setup_test_state().await;
        let app = app(state);
        db.pool().close().await;

        let response = app
            .clone()
            .oneshot(Request::get("/admin/registrations").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "Failed to load registrations." }));

        let response = app
            .oneshot(Request::get("/admin/registrations/export").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "Failed to export registrations." }));
    }
}
