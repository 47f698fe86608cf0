//! # REST API for Courses
//!
//! Public catalog lookup plus the admin create/update/delete endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::course_service::COURSE_NOT_FOUND;
use crate::io::rest::envelope::{ApiError, ApiJson, ApiQuery, ApiResult, CourseId};
use crate::io::rest::mappers::course_mapper::CourseMapper;
use crate::AppState;
use shared::{ApiResponse, Course, CourseQuery, CreateCourseRequest, UpdateCourseRequest};

/// Public course routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new().route("/courses", get(list_or_find_courses))
}

/// Admin course routes, mounted under `/api/admin`
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(admin_list_courses).post(create_course))
        .route("/courses/:id", put(update_course).delete(delete_course))
}

/// List all courses, or return a single course when `?slug=` is given.
///
/// The two shapes differ (`data` is an array or an object), so the envelope
/// carries raw JSON.
pub async fn list_or_find_courses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CourseQuery>,
) -> ApiResult<serde_json::Value> {
    const FAILURE: &str = "Something went wrong while fetching courses.";

    match query.slug.filter(|slug| !slug.is_empty()) {
        Some(slug) => {
            info!("GET /api/courses?slug={}", slug);
            let course = state
                .course_service
                .get_course_by_slug(&slug)
                .await
                .map_err(|e| ApiError::from_domain(e, FAILURE))?
                .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, COURSE_NOT_FOUND))?;
            let data = to_json_value(CourseMapper::to_dto(course), FAILURE)?;
            Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
        }
        None => {
            info!("GET /api/courses");
            let courses = state
                .course_service
                .list_courses()
                .await
                .map_err(|e| ApiError::from_domain(e, FAILURE))?;
            let data = to_json_value(CourseMapper::to_dto_list(courses), FAILURE)?;
            Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
        }
    }
}

fn to_json_value<T: Serialize>(value: T, failure: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        error!("{} Cause: {}", failure, e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
    })
}

/// List all courses for the admin area
pub async fn admin_list_courses(State(state): State<AppState>) -> ApiResult<Vec<Course>> {
    info!("GET /api/admin/courses");

    let courses = state
        .course_service
        .list_courses()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to load courses."))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(CourseMapper::to_dto_list(courses)))))
}

/// Create a course
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCourseRequest>,
) -> ApiResult<Course> {
    info!("POST /api/admin/courses - slug: {:?}", request.slug);

    let course = state
        .course_service
        .create_course(CourseMapper::to_create_command(request))
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create course. Please try again."))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            CourseMapper::to_dto(course),
            "Course created successfully.",
        )),
    ))
}

/// Update any subset of a course's fields
pub async fn update_course(
    State(state): State<AppState>,
    CourseId(id): CourseId,
    ApiJson(request): ApiJson<UpdateCourseRequest>,
) -> ApiResult<Course> {
    info!("PUT /api/admin/courses/{}", id);

    let course = state
        .course_service
        .update_course(CourseMapper::to_update_command(id, request))
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update course. Please try again."))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(
            CourseMapper::to_dto(course),
            "Course updated successfully.",
        )),
    ))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    CourseId(id): CourseId,
) -> ApiResult<()> {
    info!("DELETE /api/admin/courses/{}", id);

    state
        .course_service
        .delete_course(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete course. Please try again."))?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Course deleted successfully."))))
}
