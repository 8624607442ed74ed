use chrono::Utc;
use uuid::{Uuid, uuid};

use crate::models::{Course, CourseLevel, CourseStatus, Lesson, NewCourse};

pub const MOCK_CREATOR_ID: Uuid = uuid!("0192f3a0-7c4e-7b21-8d3a-5f6e7a8b9c0d");

pub const MOCK_CATEGORY_WEB: Uuid = uuid!("0192f3a0-7c4e-7c01-9a00-000000000001");
pub const MOCK_CATEGORY_MARKETING: Uuid = uuid!("0192f3a0-7c4e-7c01-9a00-000000000002");
pub const MOCK_CATEGORY_BUSINESS: Uuid = uuid!("0192f3a0-7c4e-7c01-9a00-000000000003");

struct Sample {
    title: &'static str,
    category: Uuid,
    level: CourseLevel,
    price: f64,
    image: &'static str,
    status: CourseStatus,
    lessons: &'static [(&'static str, u32)],
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Graphic Design Fundamentals",
        category: MOCK_CATEGORY_WEB,
        level: CourseLevel::Beginner,
        price: 99.0,
        image: "https://img.freepik.com/free-photo/beautiful-house-with-nature-elements_23-2151848749.jpg",
        status: CourseStatus::Active,
        lessons: &[("Color theory", 45), ("Typography", 60), ("Layout grids", 50)],
    },
    Sample {
        title: "Digital Marketing Mastery",
        category: MOCK_CATEGORY_MARKETING,
        level: CourseLevel::Intermediate,
        price: 79.0,
        image: "https://img.freepik.com/free-vector/hand-drawn-science-education-background_23-2148499325.jpg",
        status: CourseStatus::Active,
        lessons: &[("Funnels", 40), ("Paid search", 55)],
    },
    Sample {
        title: "Business Analytics with Excel",
        category: MOCK_CATEGORY_BUSINESS,
        level: CourseLevel::Intermediate,
        price: 95.0,
        image: "https://img.freepik.com/free-vector/flat-woman-taking-care-plants-indoors_23-2148983751.jpg",
        status: CourseStatus::Draft,
        lessons: &[("Pivot tables", 60), ("Forecasting", 75)],
    },
    Sample {
        title: "Python for Beginners",
        category: MOCK_CATEGORY_WEB,
        level: CourseLevel::Beginner,
        price: 89.0,
        image: "https://img.freepik.com/free-vector/flat-adventure-background_23-2149031058.jpg",
        status: CourseStatus::Active,
        lessons: &[("Variables", 30), ("Control flow", 45), ("Functions", 50)],
    },
    Sample {
        title: "UI/UX Design Basics",
        category: MOCK_CATEGORY_WEB,
        level: CourseLevel::Beginner,
        price: 89.0,
        image: "https://img.freepik.com/free-photo/anime-style-character-with-water_23-2151080214.jpg",
        status: CourseStatus::Active,
        lessons: &[("User research", 40), ("Wireframing", 55)],
    },
    Sample {
        title: "Social Media Strategies",
        category: MOCK_CATEGORY_MARKETING,
        level: CourseLevel::Advanced,
        price: 109.0,
        image: "https://img.freepik.com/free-vector/flat-background-autumn-season-celebration_23-2150696152.jpg",
        status: CourseStatus::Archived,
        lessons: &[("Content calendars", 35), ("Analytics", 50)],
    },
];

pub(super) fn sample_courses() -> Vec<Course> {
    SAMPLES
        .iter()
        .map(|sample| {
            let new_course = NewCourse {
                title: sample.title.to_string(),
                description: None,
                category_ids: Some(vec![sample.category]),
                level: Some(sample.level),
                lessons: Some(
                    sample
                        .lessons
                        .iter()
                        .map(|(title, duration)| Lesson {
                            title: title.to_string(),
                            duration: *duration,
                        })
                        .collect(),
                ),
                price: Some(sample.price),
                image: Some(sample.image.to_string()),
                status: Some(sample.status),
                creator_id: MOCK_CREATOR_ID,
            };
            new_course.into_course(Uuid::now_v7(), Utc::now())
        })
        .collect()
}
