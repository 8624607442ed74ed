use uuid::Uuid;

use crate::models::page::paginate;
use crate::models::{Course, CourseStatus, Page, PageRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFilter {
    All,
    Creator(Uuid),
    /// Matches when the id appears anywhere in the course's category list.
    Category(Uuid),
}

impl CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Creator(id) => course.creator_id == *id,
            CourseFilter::Category(id) => course.category_ids.contains(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseQuery {
    pub filter: CourseFilter,
    pub status: Option<CourseStatus>,
    pub page: PageRequest,
}

impl CourseQuery {
    pub fn new(filter: CourseFilter) -> Self {
        Self {
            filter,
            status: None,
            page: PageRequest::default(),
        }
    }

    pub fn by_creator(creator_id: Uuid) -> Self {
        Self::new(CourseFilter::Creator(creator_id))
    }

    pub fn by_category(category_id: Uuid) -> Self {
        Self::new(CourseFilter::Category(category_id))
    }

    pub fn with_status(mut self, status: Option<CourseStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// `Unspecified` is the "no filter" sentinel, never a value to match.
    fn effective_status(&self) -> Option<CourseStatus> {
        self.status.filter(|s| *s != CourseStatus::Unspecified)
    }

    pub fn apply(&self, courses: &[Course]) -> Page<Course> {
        let status = self.effective_status();
        let filtered: Vec<Course> = courses
            .iter()
            .filter(|c| self.filter.matches(c))
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect();

        paginate(filtered, self.page)
    }
}
