pub mod course_service;
pub mod health;

pub use course_service::{CourseService, UserCourses};
pub use health::HealthService;
