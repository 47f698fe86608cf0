//! # REST API Interface Layer
//!
//! HTTP endpoints for the public catalog, registration intake and the
//! admin back-office.
//!
//! Every JSON response uses the `ApiResponse` envelope from `shared`:
//! `success` plus `data` and/or `message` on success, `error` on failure.
//! Each `*_apis` module exposes a public `router()` and/or an
//! `admin_router()`; `create_router` mounts them under `/api` and
//! `/api/admin`.

pub mod auth_apis;
pub mod course_apis;
pub mod envelope;
pub mod mappers;
pub mod registration_apis;

pub use envelope::{ApiError, ApiJson, ApiQuery, ApiResult, CourseId};
