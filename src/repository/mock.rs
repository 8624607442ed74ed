use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Course, CourseUpdate, Page};
use crate::query::CourseQuery;
use crate::store::CourseStore;

use super::CourseRepository;

/// Serves courses from an in-memory `CourseStore`.
pub struct MockCourseRepository {
    store: RwLock<CourseStore>,
}

impl MockCourseRepository {
    pub fn new(store: CourseStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn seeded() -> Self {
        Self::new(CourseStore::seeded())
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CourseRepository for MockCourseRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.store.read().await.get_all())
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        Ok(self.store.read().await.find_by_id(&id))
    }

    async fn insert_course(&self, course: Course) -> Result<Course, AppError> {
        Ok(self.store.write().await.add(course))
    }

    async fn update_course(
        &self,
        id: Uuid,
        update: CourseUpdate,
    ) -> Result<Option<Course>, AppError> {
        Ok(self.store.write().await.update(&id, update))
    }

    async fn delete_course(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.store.write().await.delete(&id))
    }

    async fn health(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn query_courses(&self, query: &CourseQuery) -> Result<Page<Course>, AppError> {
        let store = self.store.read().await;
        Ok(query.apply(store.as_slice()))
    }
}
