//! Domain-level command types.
//!
//! These are **not** exposed over the API. The REST layer maps the DTOs from
//! the `shared` crate onto them.

pub mod courses {
    /// Input for creating a course. Fields are optional so that missing
    /// values are reported by the service's validation.
    #[derive(Debug, Clone, Default)]
    pub struct CreateCourseCommand {
        pub title: Option<String>,
        pub slug: Option<String>,
        pub category: Option<String>,
        pub description: Option<String>,
        pub duration: Option<String>,
        pub schedule: Option<String>,
        pub location: Option<String>,
        pub trainer: Option<String>,
    }

    /// Partial update of a course; `None` leaves a field untouched.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCourseCommand {
        pub id: i64,
        pub title: Option<String>,
        pub slug: Option<String>,
        pub category: Option<String>,
        pub description: Option<String>,
        pub duration: Option<String>,
        pub schedule: Option<String>,
        pub location: Option<String>,
        pub trainer: Option<String>,
    }

    impl UpdateCourseCommand {
        /// Provided fields as (name, value) pairs
        pub fn provided_fields(&self) -> Vec<(&'static str, &str)> {
            [
                ("title", &self.title),
                ("slug", &self.slug),
                ("category", &self.category),
                ("description", &self.description),
                ("duration", &self.duration),
                ("schedule", &self.schedule),
                ("location", &self.location),
                ("trainer", &self.trainer),
            ]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect()
        }
    }
}

pub mod registrations {
    /// Input for creating a registration. `course_id` is `None` when the
    /// client sent no id or something that is not an integer.
    #[derive(Debug, Clone, Default)]
    pub struct CreateRegistrationCommand {
        pub full_name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub course_id: Option<i64>,
    }
}

pub mod auth {
    #[derive(Debug, Clone)]
    pub struct AdminCredentials {
        pub email: String,
        pub password: String,
    }
}
