//! Connect JSON client for `courses.v1.CourseService`.

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::api::dto::{
    CoursePageResponse, CourseResponse, CreateCourseRequest, DeleteCourseRequest,
    DeleteCourseResponse, GetCourseByIdRequest, GetCoursesByCategoryIdRequest,
    GetCoursesByCreatorIdRequest, GetCoursesByUserIdRequest, GetUserCoursesRequest,
    GetUserCoursesResponse, UpdateCourseRequest,
};
use crate::api::COURSE_SERVICE;
use crate::error::{AppError, ErrorResponse};

#[derive(Clone, Debug)]
pub struct CourseClient {
    client: Client,
    base_url: String,
}

impl CourseClient {
    /// `base_url` is the server root; the `/api` prefix is added here.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn call<Req, Res>(&self, method: &str, req: &Req) -> Result<Res, AppError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = format!("{}/api/{}/{}", self.base_url, COURSE_SERVICE, method);

        let response = self
            .client
            .post(&url)
            .header("Connect-Protocol-Version", "1")
            .json(req)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => AppError::Remote {
                    code: err.code,
                    message: err.message,
                },
                Err(_) => AppError::Remote {
                    code: "unknown".to_string(),
                    message: format!("{} {}: {}", method, status, body),
                },
            });
        }

        Ok(response.json::<Res>().await?)
    }

    pub async fn create_course(
        &self,
        req: &CreateCourseRequest,
    ) -> Result<CourseResponse, AppError> {
        self.call("CreateCourse", req).await
    }

    pub async fn get_course_by_id(
        &self,
        req: &GetCourseByIdRequest,
    ) -> Result<CourseResponse, AppError> {
        self.call("GetCourseById", req).await
    }

    pub async fn update_course(
        &self,
        req: &UpdateCourseRequest,
    ) -> Result<CourseResponse, AppError> {
        self.call("UpdateCourse", req).await
    }

    pub async fn delete_course(
        &self,
        req: &DeleteCourseRequest,
    ) -> Result<DeleteCourseResponse, AppError> {
        self.call("DeleteCourse", req).await
    }

    pub async fn get_courses_by_creator_id(
        &self,
        req: &GetCoursesByCreatorIdRequest,
    ) -> Result<CoursePageResponse, AppError> {
        self.call("GetCoursesByCreatorId", req).await
    }

    pub async fn get_courses_by_category_id(
        &self,
        req: &GetCoursesByCategoryIdRequest,
    ) -> Result<CoursePageResponse, AppError> {
        self.call("GetCoursesByCategoryId", req).await
    }

    pub async fn get_courses_by_user_id(
        &self,
        req: &GetCoursesByUserIdRequest,
    ) -> Result<CoursePageResponse, AppError> {
        self.call("GetCoursesByUserId", req).await
    }

    pub async fn get_user_courses(
        &self,
        req: &GetUserCoursesRequest,
    ) -> Result<GetUserCoursesResponse, AppError> {
        self.call("GetUserCourses", req).await
    }
}
