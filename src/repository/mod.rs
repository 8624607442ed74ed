//! Persistence seam for courses.
//!
//! Handlers never touch storage directly; they go through a
//! `CourseRepository` injected via `AppState`.

mod mock;
mod sqlite;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Course, CourseUpdate, Page};
use crate::query::CourseQuery;

pub use mock::MockCourseRepository;
pub use sqlite::SqliteCourseRepository;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn find_course(&self, id: Uuid) -> Result<Option<Course>, AppError>;
    async fn insert_course(&self, course: Course) -> Result<Course, AppError>;
    async fn update_course(
        &self,
        id: Uuid,
        update: CourseUpdate,
    ) -> Result<Option<Course>, AppError>;
    /// Returns `false` when no course had the id.
    async fn delete_course(&self, id: Uuid) -> Result<bool, AppError>;
    async fn health(&self) -> Result<(), AppError>;

    async fn query_courses(&self, query: &CourseQuery) -> Result<Page<Course>, AppError> {
        let courses = self.list_courses().await?;
        Ok(query.apply(&courses))
    }
}
