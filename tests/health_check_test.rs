use std::net::SocketAddr;

use sqlx::sqlite::SqlitePoolOptions;

use coursify::api::dto::{CreateCourseRequest, GetCoursesByCreatorIdRequest, GetUserCoursesRequest};
use coursify::client::CourseClient;
use coursify::services::HealthService;
use coursify::store::MOCK_CREATOR_ID;
use coursify::{AppError, AppState, Config, router};

async fn spawn_server(debug_data: bool) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    let pool = SqlitePoolOptions::new()
        .connect_lazy("sqlite::memory:")
        .expect("Failed to create pool");
    let mut config = Config::for_addr(addr);
    config.debug_data = debug_data;
    let app = router(AppState::new(config, pool));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    addr
}

#[tokio::test]
async fn test_health_check_passes_against_mock_store() {
    let addr = spawn_server(true).await;
    let client = CourseClient::new(format!("http://{}", addr)).unwrap();

    let report = HealthService::new(client.clone()).check().await;

    let names: Vec<&str> = report.routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "createCourse",
            "getCoursesByUserId",
            "getCoursesByCreatorId",
            "getCourseById",
            "updateCourse",
            "deleteCourse",
        ]
    );
    assert!(report.ok, "health check failed: {:?}", report.routes);

    // the probe course is cleaned up
    let listing = client
        .get_user_courses(&GetUserCoursesRequest::default())
        .await
        .unwrap();
    assert_eq!(listing.total, 6);
}

#[tokio::test]
async fn test_health_check_finds_course_past_first_page() {
    let addr = spawn_server(true).await;
    let client = CourseClient::new(format!("http://{}", addr)).unwrap();

    // 6 seeded + 4 extra fills the default page, pushing the check's course to page 2
    for i in 0..4 {
        client
            .create_course(&CreateCourseRequest {
                title: format!("extra {}", i),
                creator_id: Some(MOCK_CREATOR_ID.into()),
                ..Default::default()
            })
            .await
            .expect("Failed to create course");
    }

    let report = HealthService::new(client).check().await;
    assert!(report.ok, "health check failed: {:?}", report.routes);
}

#[tokio::test]
async fn test_health_check_reports_unimplemented_backend() {
    let addr = spawn_server(false).await;
    let client = CourseClient::new(format!("http://{}", addr)).unwrap();

    let report = HealthService::new(client.clone()).check().await;
    assert!(!report.ok);
    assert!(report.routes.iter().all(|r| !r.ok));
    assert_eq!(
        report.routes[3].error.as_deref(),
        Some("Cannot test: createCourse failed")
    );

    let err = client
        .get_courses_by_creator_id(&GetCoursesByCreatorIdRequest {
            creator_id: Some(MOCK_CREATOR_ID.into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Remote { ref code, .. } if code == "unimplemented"));
}

#[tokio::test]
async fn test_health_check_route() {
    let addr = spawn_server(true).await;

    let response: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{}/api/courses.v1.CourseService/HealthCheck", addr))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response["ok"], true);
    assert_eq!(response["routes"].as_array().unwrap().len(), 6);
}
