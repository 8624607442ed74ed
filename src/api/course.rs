use axum::Json;
use axum::extract::State;

use crate::api::ConnectJson;
use crate::api::dto::*;
use crate::error::AppError;
use crate::models::NewCourse;
use crate::services::CourseService;
use crate::state::AppState;

fn service(state: &AppState) -> CourseService {
    CourseService::new(state.courses.clone())
}

pub async fn get_courses_by_creator_id(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<GetCoursesByCreatorIdRequest>,
) -> Result<Json<CoursePageResponse>, AppError> {
    let params = req.params()?;
    let page = service(&state)
        .get_courses_by_creator_id(params.id, params.status, params.page)
        .await?;
    Ok(Json(page.into()))
}

pub async fn get_courses_by_category_id(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<GetCoursesByCategoryIdRequest>,
) -> Result<Json<CoursePageResponse>, AppError> {
    let params = req.params()?;
    let page = service(&state)
        .get_courses_by_category_id(params.id, params.status, params.page)
        .await?;
    Ok(Json(page.into()))
}

pub async fn get_courses_by_user_id(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<GetCoursesByUserIdRequest>,
) -> Result<Json<CoursePageResponse>, AppError> {
    let params = req.params()?;
    let page = service(&state)
        .get_courses_by_user_id(params.id, params.page)
        .await?;
    Ok(Json(page.into()))
}

pub async fn get_user_courses(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<GetUserCoursesRequest>,
) -> Result<Json<GetUserCoursesResponse>, AppError> {
    let listing = service(&state).get_user_courses(&req.status_filter).await?;
    Ok(Json(listing.into()))
}

pub async fn get_course_by_id(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<GetCourseByIdRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = service(&state).get_course_by_id(req.course_id()?).await?;
    Ok(Json(course.into()))
}

pub async fn create_course(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<CreateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let input = NewCourse::try_from(req)?;
    let course = service(&state).create_course(input).await?;
    Ok(Json(course.into()))
}

pub async fn update_course(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let (id, update) = req.into_update()?;
    let course = service(&state).update_course(id, update).await?;
    Ok(Json(course.into()))
}

pub async fn delete_course(
    State(state): State<AppState>,
    ConnectJson(req): ConnectJson<DeleteCourseRequest>,
) -> Result<Json<DeleteCourseResponse>, AppError> {
    service(&state).delete_course(req.course_id()?).await?;
    Ok(Json(DeleteCourseResponse { success: true }))
}
