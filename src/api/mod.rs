pub mod course;
pub mod dto;
pub mod health;

use axum::extract::FromRequest;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

pub const COURSE_SERVICE: &str = "courses.v1.CourseService";

/// JSON body whose rejection is reported as a Connect `invalid_argument`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ConnectJson<T>(pub T);

fn rpc(method: &str) -> String {
    format!("/api/{}/{}", COURSE_SERVICE, method)
}

pub fn router(state: AppState) -> Router {
    let cors = match state.config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        Err(_) => {
            warn!("ignoring invalid CORS_ORIGIN {:?}", state.config.cors_origin);
            CorsLayer::new()
        }
    };

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/health/db", get(health::health_db))
        .route(&rpc("GetCoursesByCreatorId"), post(course::get_courses_by_creator_id))
        .route(&rpc("GetCoursesByCategoryId"), post(course::get_courses_by_category_id))
        .route(&rpc("GetCoursesByUserId"), post(course::get_courses_by_user_id))
        .route(&rpc("GetUserCourses"), post(course::get_user_courses))
        .route(&rpc("GetCourseById"), post(course::get_course_by_id))
        .route(&rpc("CreateCourse"), post(course::create_course))
        .route(&rpc("UpdateCourse"), post(course::update_course))
        .route(&rpc("DeleteCourse"), post(course::delete_course))
        .route(&rpc("HealthCheck"), post(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
