//! Wire messages for the `courses.v1.CourseService` Connect API.
//!
//! Field names and encodings follow the protobuf JSON mapping: camelCase
//! keys, base64 `bytes`, enum names as strings, RFC 3339 timestamps.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD, STANDARD_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Course, CourseLevel, CourseStatus, CourseUpdate, Lesson, NewCourse, Page, PageRequest};
use crate::services::UserCourses;
use crate::validation;

/// A protobuf `bytes` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl From<Uuid> for Bytes {
    fn from(id: Uuid) -> Self {
        Bytes(id.as_bytes().to_vec())
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        [STANDARD, URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
            .iter()
            .find_map(|engine| engine.decode(&encoded).ok())
            .map(Bytes)
            .ok_or_else(|| serde::de::Error::custom("invalid base64 in bytes field"))
    }
}

fn required_id(bytes: &Option<Bytes>, field: &str) -> Result<Uuid, AppError> {
    validation::require_id(bytes.as_ref().map(|b| b.0.as_slice()), field)
}

fn id_list(ids: &[Bytes], field: &str) -> Result<Vec<Uuid>, AppError> {
    ids.iter()
        .map(|b| validation::parse_id(&b.0, field))
        .collect()
}

fn page_request(page: i32, page_size: i32) -> Result<PageRequest, AppError> {
    Ok(PageRequest::new(
        validation::validate_page_value(page, "page")?,
        validation::validate_page_value(page_size, "pageSize")?,
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMessage {
    pub id: Bytes,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_ids: Vec<Bytes>,
    #[serde(default)]
    pub level: CourseLevel,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: CourseStatus,
    pub creator_id: Bytes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseMessage {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.into(),
            title: course.title,
            description: course.description,
            category_ids: course.category_ids.into_iter().map(Bytes::from).collect(),
            level: course.level,
            lessons: course.lessons,
            price: course.price,
            image: course.image,
            status: course.status,
            creator_id: course.creator_id.into(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

// Paginated listings

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoursesByCreatorIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<CourseStatus>,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoursesByCategoryIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<CourseStatus>,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoursesByUserIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Bytes>,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
}

/// Validated listing parameters.
pub struct ListParams {
    pub id: Uuid,
    pub status: Option<CourseStatus>,
    pub page: PageRequest,
}

impl GetCoursesByCreatorIdRequest {
    pub fn params(&self) -> Result<ListParams, AppError> {
        Ok(ListParams {
            id: required_id(&self.creator_id, "creatorId")?,
            status: self.status_filter,
            page: page_request(self.page, self.page_size)?,
        })
    }
}

impl GetCoursesByCategoryIdRequest {
    pub fn params(&self) -> Result<ListParams, AppError> {
        Ok(ListParams {
            id: required_id(&self.category_id, "categoryId")?,
            status: self.status_filter,
            page: page_request(self.page, self.page_size)?,
        })
    }
}

impl GetCoursesByUserIdRequest {
    pub fn params(&self) -> Result<ListParams, AppError> {
        Ok(ListParams {
            id: required_id(&self.user_id, "userId")?,
            status: None,
            page: page_request(self.page, self.page_size)?,
        })
    }
}

/// Shared envelope of every paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePageResponse {
    #[serde(default)]
    pub courses: Vec<CourseMessage>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl From<Page<Course>> for CoursePageResponse {
    fn from(page: Page<Course>) -> Self {
        Self {
            courses: page.items.into_iter().map(CourseMessage::from).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserCoursesRequest {
    #[serde(default)]
    pub status_filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserCoursesResponse {
    #[serde(default)]
    pub courses: Vec<CourseMessage>,
    pub total: u32,
}

impl From<UserCourses> for GetUserCoursesResponse {
    fn from(listing: UserCourses) -> Self {
        Self {
            courses: listing.courses.into_iter().map(CourseMessage::from).collect(),
            total: listing.total,
        }
    }
}

// Single course operations

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCourseByIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bytes>,
}

impl GetCourseByIdRequest {
    pub fn course_id(&self) -> Result<Uuid, AppError> {
        required_id(&self.id, "id")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub course: CourseMessage,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            course: course.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Bytes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Bytes>,
}

impl TryFrom<CreateCourseRequest> for NewCourse {
    type Error = AppError;

    fn try_from(req: CreateCourseRequest) -> Result<Self, Self::Error> {
        validation::validate_title(&req.title)?;
        let creator_id = required_id(&req.creator_id, "creatorId")?;
        if let Some(price) = req.price {
            validation::validate_price(price)?;
        }
        if let Some(lessons) = &req.lessons {
            validation::validate_lessons(lessons)?;
        }
        let category_ids = req
            .category_ids
            .as_deref()
            .map(|ids| id_list(ids, "categoryIds"))
            .transpose()?;

        Ok(NewCourse {
            title: req.title,
            description: req.description,
            category_ids,
            level: req.level,
            lessons: req.lessons,
            price: req.price,
            image: req.image,
            status: req.status,
            creator_id,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Bytes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

impl UpdateCourseRequest {
    pub fn into_update(self) -> Result<(Uuid, CourseUpdate), AppError> {
        let id = required_id(&self.id, "id")?;
        if let Some(title) = &self.title {
            validation::validate_title(title)?;
        }
        if let Some(price) = self.price {
            validation::validate_price(price)?;
        }
        if let Some(lessons) = &self.lessons {
            validation::validate_lessons(lessons)?;
        }
        let category_ids = self
            .category_ids
            .as_deref()
            .map(|ids| id_list(ids, "categoryIds"))
            .transpose()?;

        Ok((
            id,
            CourseUpdate {
                title: self.title,
                description: self.description,
                category_ids,
                level: self.level,
                lessons: self.lessons,
                price: self.price,
                image: self.image,
                status: self.status,
            },
        ))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCourseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bytes>,
}

impl DeleteCourseRequest {
    pub fn course_id(&self) -> Result<Uuid, AppError> {
        required_id(&self.id, "id")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCourseResponse {
    pub success: bool,
}

// Health

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthCheckRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteHealth {
    pub name: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub ok: bool,
    #[serde(default)]
    pub routes: Vec<RouteHealth>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_message_wire_shape() {
        let creator = Uuid::now_v7();
        let category = Uuid::now_v7();
        let mut new_course = NewCourse::new("Rust", creator);
        new_course.category_ids = Some(vec![category]);
        let course = new_course.into_course(Uuid::now_v7(), Utc::now());

        let value = serde_json::to_value(CourseMessage::from(course.clone())).unwrap();
        assert_eq!(value["id"], json!(STANDARD.encode(course.id.as_bytes())));
        assert_eq!(value["creatorId"], json!(STANDARD.encode(creator.as_bytes())));
        assert_eq!(value["categoryIds"][0], json!(STANDARD.encode(category.as_bytes())));
        assert_eq!(value["status"], json!("COURSE_STATUS_DRAFT"));
        assert_eq!(value["level"], json!("COURSE_LEVEL_UNSPECIFIED"));
    }

    #[test]
    fn test_bytes_accepts_url_safe_base64() {
        let raw = vec![0xfb, 0xff, 0xfe, 0x01];
        let url_safe = format!("\"{}\"", URL_SAFE_NO_PAD.encode(&raw));
        let decoded: Bytes = serde_json::from_str(&url_safe).unwrap();
        assert_eq!(decoded.0, raw);

        assert!(serde_json::from_str::<Bytes>("\"not base64!\"").is_err());
    }

    #[test]
    fn test_create_request_requires_creator() {
        let req: CreateCourseRequest = serde_json::from_value(json!({ "title": "Intro" })).unwrap();
        let err = NewCourse::try_from(req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("creatorId")));
    }

    #[test]
    fn test_create_request_rejects_short_ids() {
        let creator = Uuid::now_v7();
        let req: CreateCourseRequest = serde_json::from_value(json!({
            "title": "Intro",
            "creatorId": STANDARD.encode(creator.as_bytes()),
            "categoryIds": [STANDARD.encode([1u8, 2, 3])],
        }))
        .unwrap();
        assert!(matches!(NewCourse::try_from(req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_update_request_only_carries_present_fields() {
        let id = Uuid::now_v7();
        let req: UpdateCourseRequest = serde_json::from_value(json!({
            "id": STANDARD.encode(id.as_bytes()),
            "status": "COURSE_STATUS_ARCHIVED",
        }))
        .unwrap();

        let (target, update) = req.into_update().unwrap();
        assert_eq!(target, id);
        assert_eq!(update.status, Some(CourseStatus::Archived));
        assert!(update.title.is_none());
        assert!(update.category_ids.is_none());
        assert!(update.lessons.is_none());
    }

    #[test]
    fn test_negative_page_is_rejected() {
        let req = GetCoursesByCreatorIdRequest {
            creator_id: Some(Uuid::now_v7().into()),
            page: -1,
            ..Default::default()
        };
        assert!(matches!(req.params(), Err(AppError::Validation(_))));
    }
}
