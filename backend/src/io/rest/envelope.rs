//! Envelope and error translation shared by every REST handler.
//!
//! Handlers return `ApiResult<T>`; failures become
//! `{ "success": false, "error": ... }` with the matching status code.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domain::DomainError;
use shared::ApiResponse;

pub const INVALID_JSON: &str = "Invalid JSON in request body.";
pub const INVALID_FIELD_TYPES: &str = "Request body contains fields of the wrong type.";
pub const INVALID_COURSE_ID: &str = "Invalid course id.";
pub const INVALID_QUERY: &str = "Invalid query string.";

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// A failed request, rendered as a failure envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translate a domain error. Client-caused errors keep their message;
    /// anything else is logged here and replaced by `fallback` so store
    /// details never reach the caller.
    pub fn from_domain(err: DomainError, fallback: &str) -> Self {
        match err {
            DomainError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            DomainError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            DomainError::Conflict(message) => Self::new(StatusCode::CONFLICT, message),
            other @ (DomainError::Persistence(_) | DomainError::Export(_)) => {
                error!("{} Cause: {}", fallback, other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }

    fn from_json_rejection(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonDataError(_) => Self::bad_request(INVALID_FIELD_TYPES),
            _ => Self::bad_request(INVALID_JSON),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::failure(self.message))).into_response()
    }
}

/// JSON body extractor whose rejection is a failure envelope instead of
/// axum's plain-text error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::from_json_rejection(rejection)),
        }
    }
}

/// Query string extractor that rejects with a failure envelope.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!("Rejected query string: {}", rejection.body_text());
                Err(ApiError::bad_request(INVALID_QUERY))
            }
        }
    }
}

/// The `:id` path segment of a course route.
///
/// Extracted from the request parts, so an invalid id is reported before
/// the body is read.
pub struct CourseId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_COURSE_ID))?;
        parse_course_id(&raw).map(Self)
    }
}

/// Parse a course id path segment
pub fn parse_course_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| {
        warn!("Invalid course id in path: {}", raw);
        ApiError::bad_request(INVALID_COURSE_ID)
    })
}
