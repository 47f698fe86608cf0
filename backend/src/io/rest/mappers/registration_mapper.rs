//! backend/src/io/rest/mappers/registration_mapper.rs

use crate::domain::commands::registrations::CreateRegistrationCommand;
use crate::domain::models::registration::{
    Registration as DomainRegistration, RegistrationListing,
};
use crate::storage::sqlite::format_timestamp;
use shared::{
    CourseSummary, CreateRegistrationRequest, Registration as SharedRegistration,
    RegistrationWithCourse,
};

/// Mapper between the shared registration DTOs and domain types.
pub struct RegistrationMapper;

impl RegistrationMapper {
    pub fn to_dto(domain: DomainRegistration) -> SharedRegistration {
        SharedRegistration {
            id: domain.id,
            full_name: domain.full_name,
            email: domain.email,
            phone: domain.phone,
            course_id: domain.course_id,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    pub fn to_listing_dto(domain: RegistrationListing) -> RegistrationWithCourse {
        RegistrationWithCourse {
            registration: Self::to_dto(domain.registration),
            course: domain.course.map(|course| CourseSummary {
                id: course.id,
                title: course.title,
            }),
        }
    }

    pub fn to_listing_dto_list(domain: Vec<RegistrationListing>) -> Vec<RegistrationWithCourse> {
        domain.into_iter().map(Self::to_listing_dto).collect()
    }

    /// A `courseId` that is not a JSON integer is dropped, which the service
    /// reports as a missing/invalid field.
    pub fn to_create_command(request: CreateRegistrationRequest) -> CreateRegistrationCommand {
        CreateRegistrationCommand {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            course_id: request.course_id.as_ref().and_then(serde_json::Value::as_i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(course_id: serde_json::Value) -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("123".to_string()),
            course_id: Some(course_id),
        }
    }

    #[test]
    fn test_integer_course_id_is_kept() {
        let command = RegistrationMapper::to_create_command(request(json!(4)));
        assert_eq!(command.course_id, Some(4));
    }

    #[test]
    fn test_non_integer_course_id_is_dropped() {
        assert_eq!(RegistrationMapper::to_create_command(request(json!("4"))).course_id, None);
        assert_eq!(RegistrationMapper::to_create_command(request(json!(4.5))).course_id, None);
        assert_eq!(RegistrationMapper::to_create_command(request(json!(null))).course_id, None);
    }
}
