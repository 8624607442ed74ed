use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Course, CourseStatus, CourseUpdate, NewCourse, Page, PageRequest};
use crate::query::CourseQuery;
use crate::repository::CourseRepository;

pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

/// Unpaginated listing used by the dashboard course grid.
#[derive(Debug)]
pub struct UserCourses {
    pub courses: Vec<Course>,
    pub total: u32,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_course(&self, input: NewCourse) -> Result<Course, AppError> {
        let course = input.into_course(Uuid::now_v7(), Utc::now());
        let saved = self.repo.insert_course(course).await?;
        info!("created course {} ({})", saved.id, saved.title);
        Ok(saved)
    }

    pub async fn get_course_by_id(&self, id: Uuid) -> Result<Course, AppError> {
        self.repo.find_course(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Course, AppError> {
        let course = self
            .repo
            .update_course(id, update)
            .await?
            .ok_or(AppError::NotFound)?;
        info!("updated course {}", id);
        Ok(course)
    }

    pub async fn delete_course(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete_course(id).await? {
            return Err(AppError::NotFound);
        }
        info!("deleted course {}", id);
        Ok(())
    }

    pub async fn get_courses_by_creator_id(
        &self,
        creator_id: Uuid,
        status: Option<CourseStatus>,
        page: PageRequest,
    ) -> Result<Page<Course>, AppError> {
        let query = CourseQuery::by_creator(creator_id)
            .with_status(status)
            .with_page(page);
        self.run_query(&query).await
    }

    pub async fn get_courses_by_category_id(
        &self,
        category_id: Uuid,
        status: Option<CourseStatus>,
        page: PageRequest,
    ) -> Result<Page<Course>, AppError> {
        let query = CourseQuery::by_category(category_id)
            .with_status(status)
            .with_page(page);
        self.run_query(&query).await
    }

    /// Courses are not linked to enrolled users yet, so a user's courses
    /// are the ones they created.
    pub async fn get_courses_by_user_id(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Course>, AppError> {
        let query = CourseQuery::by_creator(user_id).with_page(page);
        self.run_query(&query).await
    }

    pub async fn get_user_courses(&self, status_filter: &str) -> Result<UserCourses, AppError> {
        let status = CourseStatus::from_filter_label(status_filter);
        let courses: Vec<Course> = self
            .repo
            .list_courses()
            .await?
            .into_iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .collect();

        Ok(UserCourses {
            total: courses.len() as u32,
            courses,
        })
    }

    async fn run_query(&self, query: &CourseQuery) -> Result<Page<Course>, AppError> {
        let page = self.repo.query_courses(query).await?;
        debug!(
            "course query {:?} matched {} (page {}/{})",
            query.filter, page.total, page.page, page.total_pages
        );
        Ok(page)
    }
}
