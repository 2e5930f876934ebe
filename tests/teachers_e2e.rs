//! End-to-end tests for the teacher endpoints

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::TestApp;

async fn create_teacher(app: &TestApp, body: Value) -> String {
    let (status, created) = app.send(Method::POST, "/teachers", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Teacher created successfully.");
    created["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_then_list_round_trips_fields() {
    let app = TestApp::new().await;
    let body = json!({
        "name": "Grace",
        "department": "Science",
        "subject": "Maths",
        "photo": "g.png",
        "office": {"building": "B", "room": 12}
    });

    let id = create_teacher(&app, body).await;

    let (status, teachers) = app.send(Method::GET, "/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    let teacher = &teachers[0];
    assert_eq!(teacher["_id"], id.as_str());
    assert_eq!(teacher["name"], "Grace");
    assert_eq!(teacher["department"], "Science");
    assert_eq!(teacher["office"]["room"], 12);
}

#[tokio::test]
async fn test_update_overwrites_all_four_fields() {
    let app = TestApp::new().await;
    let id = create_teacher(
        &app,
        json!({"name": "Grace", "department": "Science", "subject": "Maths", "photo": "g.png", "email": "g@x.com"}),
    )
    .await;

    let (status, result) = app
        .send(
            Method::PATCH,
            &format!("/teachers/{id}"),
            Some(json!({"name": "Grace H", "subject": "Physics"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["acknowledged"], true);
    assert_eq!(result["matchedCount"], 1);
    assert_eq!(result["modifiedCount"], 1);

    let (_, teachers) = app.send(Method::GET, "/teachers", None).await;
    let teacher = &teachers[0];
    assert_eq!(teacher["name"], "Grace H");
    assert_eq!(teacher["subject"], "Physics");
    assert_eq!(teacher["department"], Value::Null);
    assert_eq!(teacher["photo"], Value::Null);
    assert_eq!(teacher["email"], "g@x.com");
}

#[tokio::test]
async fn test_update_unknown_teacher_reports_zero_matches() {
    let app = TestApp::new().await;

    let (status, result) = app
        .send(
            Method::PATCH,
            "/teachers/550e8400-e29b-41d4-a716-446655440000",
            Some(json!({"name": "Nobody"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["matchedCount"], 0);
    assert_eq!(result["modifiedCount"], 0);
}

#[tokio::test]
async fn test_identical_update_matches_without_modifying() {
    let app = TestApp::new().await;
    let profile = json!({"name": "Grace", "department": "Science", "subject": "Maths", "photo": "g.png"});
    let id = create_teacher(&app, profile.clone()).await;

    let (status, result) = app
        .send(Method::PATCH, &format!("/teachers/{id}"), Some(profile))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["matchedCount"], 1);
    assert_eq!(result["modifiedCount"], 0);
}

#[tokio::test]
async fn test_delete_teacher() {
    let app = TestApp::new().await;
    let id = create_teacher(&app, json!({"name": "Grace"})).await;
    create_teacher(&app, json!({"name": "Alan"})).await;
    let uri = format!("/teachers/{id}");

    let (status, deleted) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deletedCount"], 1);
    assert_eq!(app.count("teachers").await, 1);

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nul_character_is_a_client_error_and_stores_nothing() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(Method::POST, "/teachers", Some(json!({"name": "a\u{0}b"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("teachers").await, 0);
}
