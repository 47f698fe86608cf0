//! # Domain Module
//!
//! Business rules for the training center back-office, independent of HTTP
//! and of the storage engine.
//!
//! ## Module Organization
//!
//! - **course_service**: course CRUD, required-field validation, slug uniqueness
//! - **registration_service**: registration intake and admin listing
//! - **export_service**: CSV rendering of registration listings
//! - **auth**: pluggable admin credential verification
//! - **commands**: internal command types mapped from the API DTOs
//! - **errors**: `DomainError`, the taxonomy the REST layer translates
//!
//! ## Business Rules
//!
//! - Every course field is required on create and may not be blanked on update
//! - Slugs are unique; a clash is a conflict, never a silent overwrite
//! - A registration must reference an existing course
//! - Registration emails only need to contain `@`
//! - Validation always runs before any storage call

pub mod auth;
pub mod commands;
pub mod course_service;
pub mod errors;
pub mod export_service;
pub mod models;
pub mod registration_service;

pub use auth::{AuthError, AuthProvider, StaticCredentialsProvider};
pub use course_service::CourseService;
pub use errors::{DomainError, DomainResult};
pub use export_service::{ExportError, ExportService};
pub use registration_service::RegistrationService;
