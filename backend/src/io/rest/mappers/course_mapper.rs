//! backend/src/io/rest/mappers/course_mapper.rs

use crate::domain::commands::courses::{CreateCourseCommand, UpdateCourseCommand};
use crate::domain::models::course::Course as DomainCourse;
use crate::storage::sqlite::format_timestamp;
use shared::{Course as SharedCourse, CreateCourseRequest, UpdateCourseRequest};

/// Mapper between the shared course DTOs and domain types.
pub struct CourseMapper;

impl CourseMapper {
    /// Converts a domain Course model to a shared Course DTO.
    pub fn to_dto(domain: DomainCourse) -> SharedCourse {
        SharedCourse {
            id: domain.id,
            title: domain.title,
            slug: domain.slug,
            category: domain.category,
            description: domain.description,
            duration: domain.duration,
            schedule: domain.schedule,
            location: domain.location,
            trainer: domain.trainer,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    pub fn to_dto_list(domain: Vec<DomainCourse>) -> Vec<SharedCourse> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateCourseRequest) -> CreateCourseCommand {
        CreateCourseCommand {
            title: request.title,
            slug: request.slug,
            category: request.category,
            description: request.description,
            duration: request.duration,
            schedule: request.schedule,
            location: request.location,
            trainer: request.trainer,
        }
    }

    pub fn to_update_command(id: i64, request: UpdateCourseRequest) -> UpdateCourseCommand {
        UpdateCourseCommand {
            id,
            title: request.title,
            slug: request.slug,
            category: request.category,
            description: request.description,
            duration: request.duration,
            schedule: request.schedule,
            location: request.location,
            trainer: request.trainer,
        }
    }
}
