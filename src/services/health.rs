use tracing::{info, warn};

use crate::api::dto::{
    Bytes, CreateCourseRequest, DeleteCourseRequest, GetCourseByIdRequest,
    GetCoursesByCreatorIdRequest, GetCoursesByUserIdRequest, HealthCheckResponse, RouteHealth,
    UpdateCourseRequest,
};
use crate::client::CourseClient;
use crate::error::AppError;
use crate::store::MOCK_CREATOR_ID;

const CHECK_TITLE: &str = "health-check-test";
const CHECK_TITLE_UPDATED: &str = "health-check-test-updated";

/// Exercises every course route over HTTP, in dependency order, using a
/// throwaway course that is deleted at the end.
pub struct HealthService {
    client: CourseClient,
}

impl HealthService {
    pub fn new(client: CourseClient) -> Self {
        Self { client }
    }

    pub async fn check(&self) -> HealthCheckResponse {
        let mut routes = Vec::new();
        let creator: Bytes = MOCK_CREATOR_ID.into();

        let created_id = match self
            .client
            .create_course(&CreateCourseRequest {
                title: CHECK_TITLE.to_string(),
                creator_id: Some(creator.clone()),
                ..Default::default()
            })
            .await
        {
            Ok(res) => {
                routes.push(passed("createCourse"));
                Some(res.course.id)
            }
            Err(e) => {
                routes.push(failed("createCourse", e));
                None
            }
        };

        let by_user = self
            .client
            .get_courses_by_user_id(&GetCoursesByUserIdRequest {
                user_id: Some(creator.clone()),
                ..Default::default()
            })
            .await;
        routes.push(match by_user {
            Ok(_) => passed("getCoursesByUserId"),
            Err(e) => failed("getCoursesByUserId", e),
        });

        routes.push(match &created_id {
            Some(id) => match self.listed_for_creator(&creator, id).await {
                Ok(listed) => {
                    check_result("getCoursesByCreatorId", listed, "Created course not found in list")
                }
                Err(e) => failed("getCoursesByCreatorId", e),
            },
            None => match self
                .client
                .get_courses_by_creator_id(&GetCoursesByCreatorIdRequest {
                    creator_id: Some(creator),
                    ..Default::default()
                })
                .await
            {
                Ok(_) => passed("getCoursesByCreatorId"),
                Err(e) => failed("getCoursesByCreatorId", e),
            },
        });

        match &created_id {
            Some(id) => {
                routes.push(self.check_get(id).await);
                routes.push(self.check_update(id).await);
                routes.push(self.check_delete(id).await);
            }
            None => {
                for name in ["getCourseById", "updateCourse", "deleteCourse"] {
                    routes.push(RouteHealth {
                        name: name.to_string(),
                        ok: false,
                        error: Some("Cannot test: createCourse failed".to_string()),
                    });
                }
            }
        }

        let ok = routes.iter().all(|r| r.ok);
        if ok {
            info!("health check passed ({} routes)", routes.len());
        } else {
            warn!("health check failed: {:?}", routes.iter().filter(|r| !r.ok).collect::<Vec<_>>());
        }

        HealthCheckResponse { ok, routes }
    }

    /// Walks every page of the creator listing looking for `id`.
    async fn listed_for_creator(&self, creator: &Bytes, id: &Bytes) -> Result<bool, AppError> {
        let mut page = 1;
        loop {
            let res = self
                .client
                .get_courses_by_creator_id(&GetCoursesByCreatorIdRequest {
                    creator_id: Some(creator.clone()),
                    page,
                    ..Default::default()
                })
                .await?;
            if res.courses.iter().any(|c| &c.id == id) {
                return Ok(true);
            }
            if page as u32 >= res.total_pages {
                return Ok(false);
            }
            page += 1;
        }
    }

    async fn check_get(&self, id: &Bytes) -> RouteHealth {
        let res = self
            .client
            .get_course_by_id(&GetCourseByIdRequest { id: Some(id.clone()) })
            .await;
        match res {
            Ok(res) => check_result(
                "getCourseById",
                res.course.title == CHECK_TITLE && &res.course.id == id,
                "Retrieved course does not match created course",
            ),
            Err(e) => failed("getCourseById", e),
        }
    }

    async fn check_update(&self, id: &Bytes) -> RouteHealth {
        let res = self
            .client
            .update_course(&UpdateCourseRequest {
                id: Some(id.clone()),
                title: Some(CHECK_TITLE_UPDATED.to_string()),
                ..Default::default()
            })
            .await;
        match res {
            Ok(res) => check_result(
                "updateCourse",
                res.course.title == CHECK_TITLE_UPDATED && &res.course.id == id,
                "Retrieved course does not match updated course",
            ),
            Err(e) => failed("updateCourse", e),
        }
    }

    async fn check_delete(&self, id: &Bytes) -> RouteHealth {
        let res = self
            .client
            .delete_course(&DeleteCourseRequest { id: Some(id.clone()) })
            .await;
        match res {
            Ok(res) => check_result("deleteCourse", res.success, "Delete did not report success"),
            Err(e) => failed("deleteCourse", e),
        }
    }
}

fn passed(name: &str) -> RouteHealth {
    RouteHealth {
        name: name.to_string(),
        ok: true,
        error: None,
    }
}

fn failed(name: &str, err: AppError) -> RouteHealth {
    RouteHealth {
        name: name.to_string(),
        ok: false,
        error: Some(err.to_string()),
    }
}

fn check_result(name: &str, ok: bool, error: &str) -> RouteHealth {
    RouteHealth {
        name: name.to_string(),
        ok,
        error: (!ok).then(|| error.to_string()),
    }
}
