use serde::{Deserialize, Serialize};

/// A training offering as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    /// Public lookup key, unique across courses
    pub slug: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub trainer: String,
    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: String,
}

/// The slice of a course that is joined onto registration listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
}

/// A learner's expressed interest in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub course_id: i64,
    /// Creation timestamp (RFC 3339, UTC)
    pub created_at: String,
}

/// Registration row as shown in the admin area, with its course attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationWithCourse {
    #[serde(flatten)]
    pub registration: Registration,
    pub course: Option<CourseSummary>,
}

/// Body of `POST /api/admin/courses`.
///
/// Every field is optional on the wire so that missing fields are reported
/// through the envelope instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub trainer: Option<String>,
}

/// Body of `PUT /api/admin/courses/{id}`; any subset of the course fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<String>,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Kept as raw JSON so a non-integer id is a validation failure rather
    /// than a malformed body
    pub course_id: Option<serde_json::Value>,
}

/// Query string of `GET /api/courses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseQuery {
    pub slug: Option<String>,
}

/// Body of `POST /api/admin/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Uniform response envelope used by every API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Successful response carrying data and a human-readable message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Successful response with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed response
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
