use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category_ids: Vec<Uuid>,
    pub level: CourseLevel,
    pub lessons: Vec<Lesson>,
    pub price: f64,
    pub image: String,
    pub status: CourseStatus,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub duration: u32,
}

/// Input for creating a course. Anything left as `None` falls back to the
/// documented default when the course is built.
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub category_ids: Option<Vec<Uuid>>,
    pub level: Option<CourseLevel>,
    pub lessons: Option<Vec<Lesson>>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub status: Option<CourseStatus>,
    pub creator_id: Uuid,
}

impl NewCourse {
    pub fn new(title: impl Into<String>, creator_id: Uuid) -> Self {
        Self {
            title: title.into(),
            creator_id,
            ..Default::default()
        }
    }

    pub fn into_course(self, id: Uuid, now: DateTime<Utc>) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            category_ids: self.category_ids.unwrap_or_default(),
            level: self.level.unwrap_or_default(),
            lessons: self.lessons.unwrap_or_default(),
            price: self.price.unwrap_or(0.0),
            image: self.image.unwrap_or_default(),
            status: self.status.unwrap_or(CourseStatus::Draft),
            creator_id: self.creator_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sparse update. Only `Some` fields are written; the id and creator are
/// never touched.
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_ids: Option<Vec<Uuid>>,
    pub level: Option<CourseLevel>,
    pub lessons: Option<Vec<Lesson>>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub status: Option<CourseStatus>,
}

impl CourseUpdate {
    pub fn apply(self, existing: &Course, now: DateTime<Utc>) -> Course {
        Course {
            id: existing.id,
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            category_ids: self
                .category_ids
                .unwrap_or_else(|| existing.category_ids.clone()),
            level: self.level.unwrap_or(existing.level),
            lessons: self.lessons.unwrap_or_else(|| existing.lessons.clone()),
            price: self.price.unwrap_or(existing.price),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            status: self.status.unwrap_or(existing.status),
            creator_id: existing.creator_id,
            created_at: existing.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourseLevel {
    #[default]
    Unspecified,
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str_name(self) -> &'static str {
        match self {
            CourseLevel::Unspecified => "COURSE_LEVEL_UNSPECIFIED",
            CourseLevel::Beginner => "COURSE_LEVEL_BEGINNER",
            CourseLevel::Intermediate => "COURSE_LEVEL_INTERMEDIATE",
            CourseLevel::Advanced => "COURSE_LEVEL_ADVANCED",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "COURSE_LEVEL_UNSPECIFIED" => Some(CourseLevel::Unspecified),
            "COURSE_LEVEL_BEGINNER" => Some(CourseLevel::Beginner),
            "COURSE_LEVEL_INTERMEDIATE" => Some(CourseLevel::Intermediate),
            "COURSE_LEVEL_ADVANCED" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

impl TryFrom<i32> for CourseLevel {
    type Error = UnknownEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CourseLevel::Unspecified),
            1 => Ok(CourseLevel::Beginner),
            2 => Ok(CourseLevel::Intermediate),
            3 => Ok(CourseLevel::Advanced),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourseStatus {
    #[default]
    Unspecified,
    Active,
    Draft,
    Archived,
}

impl CourseStatus {
    pub fn as_str_name(self) -> &'static str {
        match self {
            CourseStatus::Unspecified => "COURSE_STATUS_UNSPECIFIED",
            CourseStatus::Active => "COURSE_STATUS_ACTIVE",
            CourseStatus::Draft => "COURSE_STATUS_DRAFT",
            CourseStatus::Archived => "COURSE_STATUS_ARCHIVED",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "COURSE_STATUS_UNSPECIFIED" => Some(CourseStatus::Unspecified),
            "COURSE_STATUS_ACTIVE" => Some(CourseStatus::Active),
            "COURSE_STATUS_DRAFT" => Some(CourseStatus::Draft),
            "COURSE_STATUS_ARCHIVED" => Some(CourseStatus::Archived),
            _ => None,
        }
    }

    /// Maps the dashboard's lowercase filter labels. Anything unrecognised,
    /// including "all", means no filter.
    pub fn from_filter_label(label: &str) -> Option<Self> {
        match label {
            "active" => Some(CourseStatus::Active),
            "draft" => Some(CourseStatus::Draft),
            "archived" => Some(CourseStatus::Archived),
            _ => None,
        }
    }
}

impl TryFrom<i32> for CourseStatus {
    type Error = UnknownEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CourseStatus::Unspecified),
            1 => Ok(CourseStatus::Active),
            2 => Ok(CourseStatus::Draft),
            3 => Ok(CourseStatus::Archived),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown enum value: {0}")]
pub struct UnknownEnumValue(pub String);

// Protobuf JSON accepts either the enum name or its number.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnumRepr {
    Name(String),
    Number(i32),
}

macro_rules! proto_enum_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str_name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match EnumRepr::deserialize(deserializer)? {
                    EnumRepr::Name(name) => <$ty>::from_str_name(&name)
                        .ok_or_else(|| serde::de::Error::custom(UnknownEnumValue(name))),
                    EnumRepr::Number(n) => <$ty>::try_from(n).map_err(serde::de::Error::custom),
                }
            }
        }
    };
}

proto_enum_serde!(CourseLevel);
proto_enum_serde!(CourseStatus);
