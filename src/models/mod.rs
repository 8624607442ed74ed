pub mod course;
pub mod page;

pub use course::{Course, CourseLevel, CourseStatus, CourseUpdate, Lesson, NewCourse};
pub use page::{Page, PageRequest};
