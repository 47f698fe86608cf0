//! # SQLite Storage Module
//!
//! SQLite-backed repository implementations.

pub mod course_repository;
pub mod registration_repository;

pub use course_repository::CourseRepository;
pub use registration_repository::RegistrationRepository;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::storage::traits::StorageError;

/// Render a timestamp the way it is stored: RFC 3339, UTC, milliseconds.
/// This format sorts lexicographically in time order.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StorageError::MalformedRow(format!("bad created_at '{}': {}", raw, e)))
}
