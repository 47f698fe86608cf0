use chrono::{DateTime, Utc};

/// A stored course.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub trainer: String,
    pub created_at: DateTime<Utc>,
}

/// A course that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub trainer: String,
    pub created_at: DateTime<Utc>,
}

impl NewCourse {
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            description: self.description,
            duration: self.duration,
            schedule: self.schedule,
            location: self.location,
            trainer: self.trainer,
            created_at: self.created_at,
        }
    }
}
