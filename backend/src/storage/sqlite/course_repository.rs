use async_trait::async_trait;
use tracing::debug;

use super::{format_timestamp, parse_timestamp};
use crate::domain::models::course::{Course, NewCourse};
use crate::storage::connection::DbConnection;
use crate::storage::traits::{CourseStorage, StorageResult};

/// Raw `courses` row
#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    slug: String,
    category: String,
    description: String,
    duration: String,
    schedule: String,
    location: String,
    trainer: String,
    created_at: String,
}

impl CourseRow {
    fn into_domain(self) -> StorageResult<Course> {
        Ok(Course {
            id: self.id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            description: self.description,
            duration: self.duration,
            schedule: self.schedule,
            location: self.location,
            trainer: self.trainer,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Repository for course operations
#[derive(Clone)]
pub struct CourseRepository {
    db: DbConnection,
}

impl CourseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStorage for CourseRepository {
    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, slug, category, description, duration, schedule, location, trainer, created_at
            FROM courses
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        debug!("Loaded {} course rows", rows.len());
        rows.into_iter().map(CourseRow::into_domain).collect()
    }

    async fn get_course_by_id(&self, id: i64) -> StorageResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, slug, category, description, duration, schedule, location, trainer, created_at
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.map(CourseRow::into_domain).transpose()
    }

    async fn get_course_by_slug(&self, slug: &str) -> StorageResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, slug, category, description, duration, schedule, location, trainer, created_at
            FROM courses
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(self.db.pool())
        .await?;

        row.map(CourseRow::into_domain).transpose()
    }

    async fn store_course(&self, course: &NewCourse) -> StorageResult<Course> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (title, slug, category, description, duration, schedule, location, trainer, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&course.title)
        .bind(&course.slug)
        .bind(&course.category)
        .bind(&course.description)
        .bind(&course.duration)
        .bind(&course.schedule)
        .bind(&course.location)
        .bind(&course.trainer)
        .bind(format_timestamp(&course.created_at))
        .execute(self.db.pool())
        .await?;

        Ok(course.clone().into_course(result.last_insert_rowid()))
    }

    async fn update_course(&self, course: &Course) -> StorageResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET title = ?, slug = ?, category = ?, description = ?, duration = ?,
                schedule = ?, location = ?, trainer = ?
            WHERE id = ?
            "#,
        )
        .bind(&course.title)
        .bind(&course.slug)
        .bind(&course.category)
        .bind(&course.description)
        .bind(&course.duration)
        .bind(&course.schedule)
        .bind(&course.location)
        .bind(&course.trainer)
        .bind(course.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_course(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
