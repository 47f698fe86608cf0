use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tracing::{info, warn};

use crate::domain::commands::registrations::CreateRegistrationCommand;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::registration::{NewRegistration, Registration, RegistrationListing};
use crate::storage::traits::{CourseStorage, RegistrationStorage, StorageError};

pub const MISSING_REGISTRATION_FIELDS: &str =
    "Missing or invalid fields. Please provide fullName, email, phone, and courseId.";
pub const INVALID_EMAIL: &str = "Please provide a valid email address.";
pub const UNKNOWN_COURSE: &str = "Selected course does not exist.";

/// Service for recording and listing course registrations
#[derive(Clone)]
pub struct RegistrationService {
    registrations: Arc<dyn RegistrationStorage>,
    courses: Arc<dyn CourseStorage>,
}

impl RegistrationService {
    pub fn new(registrations: Arc<dyn RegistrationStorage>, courses: Arc<dyn CourseStorage>) -> Self {
        Self { registrations, courses }
    }

    /// List every registration with its course, newest first
    pub async fn list_registrations(&self) -> DomainResult<Vec<RegistrationListing>> {
        let listings = self.registrations.list_registrations().await?;
        info!("Found {} registrations", listings.len());
        Ok(listings)
    }

    /// Record a learner's registration for a course
    pub async fn create_registration(
        &self,
        command: CreateRegistrationCommand,
    ) -> DomainResult<Registration> {
        let new_registration = Self::validate_command(command)?;
        info!("Creating registration for course {}", new_registration.course_id);

        if self
            .courses
            .get_course_by_id(new_registration.course_id)
            .await?
            .is_none()
        {
            warn!("Registration for unknown course: {}", new_registration.course_id);
            return Err(DomainError::NotFound(UNKNOWN_COURSE.to_string()));
        }

        // The course may disappear between the check and the insert
        let registration = self
            .registrations
            .store_registration(&new_registration)
            .await
            .map_err(|err| match err {
                StorageError::ForeignKeyViolation(_) => {
                    DomainError::NotFound(UNKNOWN_COURSE.to_string())
                }
                other => DomainError::Persistence(other),
            })?;

        info!("Created registration {} for course {}", registration.id, registration.course_id);
        Ok(registration)
    }

    /// Only a minimal shape check is applied to the email: it must contain `@`.
    fn validate_command(command: CreateRegistrationCommand) -> DomainResult<NewRegistration> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let (Some(full_name), Some(email), Some(phone), Some(course_id)) = (
            present(command.full_name),
            present(command.email),
            present(command.phone),
            command.course_id,
        ) else {
            return Err(DomainError::Validation(MISSING_REGISTRATION_FIELDS.to_string()));
        };

        if !email.contains('@') {
            return Err(DomainError::Validation(INVALID_EMAIL.to_string()));
        }

        Ok(NewRegistration {
            full_name,
            email,
            phone,
            course_id,
            created_at: Utc::now().trunc_subsecs(3),
        })
    }
}
