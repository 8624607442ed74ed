use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::api::ConnectJson;
use crate::api::dto::{HealthCheckRequest, HealthCheckResponse};
use crate::client::CourseClient;
use crate::error::AppError;
use crate::services::HealthService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub ok: bool,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn health() -> Json<ServiceHealth> {
    Json(ServiceHealth {
        ok: true,
        service: "coursify",
        error: None,
    })
}

pub async fn health_db(State(state): State<AppState>) -> (StatusCode, Json<ServiceHealth>) {
    match sqlx::query("select 1").execute(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ServiceHealth {
                ok: true,
                service: "sqlite",
                error: None,
            }),
        ),
        Err(err) => {
            error!("database health check failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServiceHealth {
                    ok: false,
                    service: "sqlite",
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

pub async fn health_check(
    State(state): State<AppState>,
    ConnectJson(_req): ConnectJson<HealthCheckRequest>,
) -> Result<Json<HealthCheckResponse>, AppError> {
    state.courses.health().await?;
    let client = CourseClient::new(state.config.base_url.clone())?;
    Ok(Json(HealthService::new(client).check().await))
}
