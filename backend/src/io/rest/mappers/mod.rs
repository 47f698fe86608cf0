//! Conversions between the wire DTOs in `shared` and domain types.

pub mod course_mapper;
pub mod registration_mapper;
