pub mod course;
pub mod registration;
