use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
}

impl NewRegistration {
    pub fn into_registration(self, id: i64) -> Registration {
        Registration {
            id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            course_id: self.course_id,
            created_at: self.created_at,
        }
    }
}

/// Id and title of the course a registration points at.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRef {
    pub id: i64,
    pub title: String,
}

/// A registration together with its joined course, as listed for admins.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationListing {
    pub registration: Registration,
    pub course: Option<CourseRef>,
}
