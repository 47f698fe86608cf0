//! # Storage Traits
//!
//! Storage abstraction used by the domain services. The SQLite repositories
//! in `storage::sqlite` are the production implementations.

use async_trait::async_trait;

use crate::domain::models::course::{Course, NewCourse};
use crate::domain::models::registration::{NewRegistration, Registration, RegistrationListing};

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("malformed row: {0}")]
    MalformedRow(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StorageError::UniqueViolation(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return StorageError::ForeignKeyViolation(db_err.message().to_string());
            }
        }
        StorageError::Database(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence operations for courses
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// All courses, newest-created first
    async fn list_courses(&self) -> StorageResult<Vec<Course>>;

    async fn get_course_by_id(&self, id: i64) -> StorageResult<Option<Course>>;

    async fn get_course_by_slug(&self, slug: &str) -> StorageResult<Option<Course>>;

    /// Insert a course and return it with its assigned id
    async fn store_course(&self, course: &NewCourse) -> StorageResult<Course>;

    /// Overwrite the mutable fields of an existing course.
    /// Returns false when no row has the course's id.
    async fn update_course(&self, course: &Course) -> StorageResult<bool>;

    /// Returns false when no row has the given id
    async fn delete_course(&self, id: i64) -> StorageResult<bool>;
}

/// Persistence operations for registrations
#[async_trait]
pub trait RegistrationStorage: Send + Sync {
    /// All registrations joined with their course, newest-created first
    async fn list_registrations(&self) -> StorageResult<Vec<RegistrationListing>>;

    /// Insert a registration and return it with its assigned id
    async fn store_registration(&self, registration: &NewRegistration) -> StorageResult<Registration>;
}
