use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tracing::{info, warn};

use crate::domain::commands::courses::{CreateCourseCommand, UpdateCourseCommand};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::course::{Course, NewCourse};
use crate::storage::traits::{CourseStorage, StorageError};

pub const MISSING_COURSE_FIELDS: &str = "Missing required fields. Please provide title, slug, category, description, duration, schedule, location, and trainer.";
pub const NO_FIELDS_TO_UPDATE: &str = "No fields provided to update.";
pub const COURSE_NOT_FOUND: &str = "Course not found";
pub const DUPLICATE_SLUG: &str = "A course with this slug already exists.";

/// Service for managing course records
#[derive(Clone)]
pub struct CourseService {
    storage: Arc<dyn CourseStorage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn CourseStorage>) -> Self {
        Self { storage }
    }

    /// List all courses, newest first
    pub async fn list_courses(&self) -> DomainResult<Vec<Course>> {
        let courses = self.storage.list_courses().await?;
        info!("Found {} courses", courses.len());
        Ok(courses)
    }

    /// Look a course up by its public slug
    pub async fn get_course_by_slug(&self, slug: &str) -> DomainResult<Option<Course>> {
        let course = self.storage.get_course_by_slug(slug).await?;
        if course.is_none() {
            warn!("Course not found for slug: {}", slug);
        }
        Ok(course)
    }

    pub async fn get_course_by_id(&self, id: i64) -> DomainResult<Option<Course>> {
        let course = self.storage.get_course_by_id(id).await?;
        if course.is_none() {
            warn!("Course not found for id: {}", id);
        }
        Ok(course)
    }

    /// Create a new course; every field is required
    pub async fn create_course(&self, command: CreateCourseCommand) -> DomainResult<Course> {
        let new_course = Self::validate_create_command(command)?;
        info!("Creating course: slug={}", new_course.slug);

        self.ensure_slug_available(&new_course.slug, None).await?;

        let course = self
            .storage
            .store_course(&new_course)
            .await
            .map_err(Self::map_write_error)?;

        info!("Created course {} with ID: {}", course.slug, course.id);
        Ok(course)
    }

    /// Apply a partial update to an existing course
    pub async fn update_course(&self, command: UpdateCourseCommand) -> DomainResult<Course> {
        info!("Updating course: {}", command.id);

        let provided = command.provided_fields();
        if provided.is_empty() {
            return Err(DomainError::Validation(NO_FIELDS_TO_UPDATE.to_string()));
        }
        let blank: Vec<&str> = provided
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !blank.is_empty() {
            return Err(DomainError::Validation(format!(
                "Fields cannot be empty: {}.",
                blank.join(", ")
            )));
        }

        let mut course = self
            .storage
            .get_course_by_id(command.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(COURSE_NOT_FOUND.to_string()))?;

        if let Some(slug) = command.slug.as_deref() {
            if slug != course.slug {
                self.ensure_slug_available(slug, Some(course.id)).await?;
            }
        }

        apply(&mut course.title, command.title);
        apply(&mut course.slug, command.slug);
        apply(&mut course.category, command.category);
        apply(&mut course.description, command.description);
        apply(&mut course.duration, command.duration);
        apply(&mut course.schedule, command.schedule);
        apply(&mut course.location, command.location);
        apply(&mut course.trainer, command.trainer);

        let updated = self
            .storage
            .update_course(&course)
            .await
            .map_err(Self::map_write_error)?;
        if !updated {
            // Deleted between the read and the write
            return Err(DomainError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        info!("Updated course {} with ID: {}", course.slug, course.id);
        Ok(course)
    }

    /// Permanently delete a course and, through the store, its registrations
    pub async fn delete_course(&self, id: i64) -> DomainResult<()> {
        info!("Deleting course: {}", id);

        if !self.storage.delete_course(id).await? {
            warn!("Delete requested for missing course: {}", id);
            return Err(DomainError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        info!("Deleted course with ID: {}", id);
        Ok(())
    }

    async fn ensure_slug_available(&self, slug: &str, owner: Option<i64>) -> DomainResult<()> {
        match self.storage.get_course_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => {
                warn!("Slug already taken: {}", slug);
                Err(DomainError::Conflict(DUPLICATE_SLUG.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// The pre-check can race with a concurrent insert; the unique index
    /// catches that case.
    fn map_write_error(err: StorageError) -> DomainError {
        match err {
            StorageError::UniqueViolation(_) => DomainError::Conflict(DUPLICATE_SLUG.to_string()),
            other => DomainError::Persistence(other),
        }
    }

    fn validate_create_command(command: CreateCourseCommand) -> DomainResult<NewCourse> {
        // Blank means whitespace-only; accepted values are stored as sent
        let required = |value: Option<String>| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DomainError::Validation(MISSING_COURSE_FIELDS.to_string()))
        };

        Ok(NewCourse {
            title: required(command.title)?,
            slug: required(command.slug)?,
            category: required(command.category)?,
            description: required(command.description)?,
            duration: required(command.duration)?,
            schedule: required(command.schedule)?,
            location: required(command.location)?,
            trainer: required(command.trainer)?,
            // Stored with millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        })
    }
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}
