mod seed;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Course, CourseUpdate};

pub use seed::{MOCK_CATEGORY_BUSINESS, MOCK_CATEGORY_MARKETING, MOCK_CATEGORY_WEB, MOCK_CREATOR_ID};

/// In-memory stand-in for the course table. Insertion order is the
/// canonical order for every read.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            courses: seed::sample_courses(),
        }
    }

    pub fn get_all(&self) -> Vec<Course> {
        self.courses.clone()
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<Course> {
        self.courses.iter().find(|c| c.id == *id).cloned()
    }

    pub fn add(&mut self, course: Course) -> Course {
        self.courses.push(course.clone());
        course
    }

    pub fn update(&mut self, id: &Uuid, update: CourseUpdate) -> Option<Course> {
        let slot = self.courses.iter_mut().find(|c| c.id == *id)?;
        let updated = update.apply(slot, Utc::now());
        *slot = updated.clone();
        Some(updated)
    }

    pub fn delete(&mut self, id: &Uuid) -> bool {
        match self.courses.iter().position(|c| c.id == *id) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseStatus, NewCourse};

    fn course(title: &str) -> Course {
        NewCourse::new(title, MOCK_CREATOR_ID).into_course(Uuid::now_v7(), Utc::now())
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let mut store = CourseStore::new();
        let titles = ["first", "second", "third", "fourth"];
        for title in titles {
            store.add(course(title));
        }

        let all: Vec<String> = store.get_all().into_iter().map(|c| c.title).collect();
        assert_eq!(all, titles);
    }

    #[test]
    fn test_update_never_changes_id() {
        let mut store = CourseStore::new();
        let original = store.add(course("Rust"));
        store.add(course("Go"));

        let updated = store
            .update(
                &original.id,
                CourseUpdate {
                    title: Some("Rust 2024".to_string()),
                    ..Default::default()
                },
            )
            .expect("course not found");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Rust 2024");
        // position is kept
        assert_eq!(store.get_all()[0].title, "Rust 2024");
    }

    #[test]
    fn test_update_status_only() {
        let mut store = CourseStore::new();
        let mut new_course = NewCourse::new("Excel", MOCK_CREATOR_ID);
        new_course.price = Some(95.0);
        new_course.description = Some("spreadsheets".to_string());
        let original = store.add(new_course.into_course(Uuid::now_v7(), Utc::now()));

        let updated = store
            .update(
                &original.id,
                CourseUpdate {
                    status: Some(CourseStatus::Archived),
                    ..Default::default()
                },
            )
            .expect("course not found");

        assert_eq!(updated.status, CourseStatus::Archived);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.price, original.price);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.creator_id, original.creator_id);
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = CourseStore::seeded();
        let before = store.get_all();
        assert!(store.update(&Uuid::now_v7(), CourseUpdate::default()).is_none());
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = CourseStore::seeded();
        let target = store.add(course("to delete"));
        let size = store.len();

        assert!(store.delete(&target.id));
        assert_eq!(store.len(), size - 1);

        assert!(!store.delete(&target.id));
        assert_eq!(store.len(), size - 1);
        assert!(store.find_by_id(&target.id).is_none());
    }

    #[test]
    fn test_find_by_id_compares_values() {
        let mut store = CourseStore::new();
        let added = store.add(course("lookup"));
        let copy = Uuid::from_bytes(*added.id.as_bytes());

        assert_eq!(store.find_by_id(&copy).map(|c| c.title), Some("lookup".to_string()));
    }

    #[test]
    fn test_seeded_store() {
        let store = CourseStore::seeded();
        assert_eq!(store.len(), 6);
        assert!(store.get_all().iter().all(|c| c.creator_id == MOCK_CREATOR_ID));

        let ids: Vec<Uuid> = store.get_all().into_iter().map(|c| c.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
