use async_trait::async_trait;
use sqlx::Row;

use super::{format_timestamp, parse_timestamp};
use crate::domain::models::registration::{
    CourseRef, NewRegistration, Registration, RegistrationListing,
};
use crate::storage::connection::DbConnection;
use crate::storage::traits::{RegistrationStorage, StorageResult};

/// Repository for registration operations
#[derive(Clone)]
pub struct RegistrationRepository {
    db: DbConnection,
}

impl RegistrationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationStorage for RegistrationRepository {
    async fn list_registrations(&self) -> StorageResult<Vec<RegistrationListing>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.full_name, r.email, r.phone, r.course_id, r.created_at,
                   c.id AS joined_course_id, c.title AS course_title
            FROM registrations r
            LEFT JOIN courses c ON c.id = r.course_id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            let created_at: String = row.try_get("created_at")?;
            let joined_id: Option<i64> = row.try_get("joined_course_id")?;
            let course_title: Option<String> = row.try_get("course_title")?;

            listings.push(RegistrationListing {
                registration: Registration {
                    id: row.try_get("id")?,
                    full_name: row.try_get("full_name")?,
                    email: row.try_get("email")?,
                    phone: row.try_get("phone")?,
                    course_id: row.try_get("course_id")?,
                    created_at: parse_timestamp(&created_at)?,
                },
                course: joined_id
                    .zip(course_title)
                    .map(|(id, title)| CourseRef { id, title }),
            });
        }

        Ok(listings)
    }

    async fn store_registration(&self, registration: &NewRegistration) -> StorageResult<Registration> {
        let result = sqlx::query(
            r#"
            INSERT INTO registrations (full_name, email, phone, course_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&registration.full_name)
        .bind(&registration.email)
        .bind(&registration.phone)
        .bind(registration.course_id)
        .bind(format_timestamp(&registration.created_at))
        .execute(self.db.pool())
        .await?;

        Ok(registration
            .clone()
            .into_registration(result.last_insert_rowid()))
    }
}
