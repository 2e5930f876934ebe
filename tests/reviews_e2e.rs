//! End-to-end tests for the review endpoints

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{error_message, TestApp};

#[tokio::test]
async fn test_create_review_defaults_to_pending() {
    let app = TestApp::new().await;

    let (status, created) = app
        .send(
            Method::POST,
            "/reviews",
            Some(json!({"user": "ada@x.com", "rating": 5, "feedback": "Great"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Review added");
    assert_eq!(created["review"]["status"], "Pending");
    assert_eq!(created["review"]["_id"], created["insertedId"]);

    let (_, reviews) = app.send(Method::GET, "/reviews", None).await;
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["status"], "Pending");
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["feedback"], "Great");
}

#[tokio::test]
async fn test_approve_then_repeat_is_not_found() {
    let app = TestApp::new().await;
    let (_, created) = app
        .send(Method::POST, "/reviews", Some(json!({"user": "ada@x.com"})))
        .await;
    let uri = format!("/reviews/{}", created["insertedId"].as_str().unwrap());

    let (status, updated) = app
        .send(Method::PATCH, &uri, Some(json!({"status": "Approved"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Review status updated successfully");
    assert_eq!(updated["result"]["modifiedCount"], 1);

    let (status, repeated) = app
        .send(Method::PATCH, &uri, Some(json!({"status": "Approved"})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&repeated), "Review not found or status unchanged");

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(json!({"status": "Rejected"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, reviews) = app.send(Method::GET, "/reviews", None).await;
    assert_eq!(reviews[0]["status"], "Rejected");
}

#[tokio::test]
async fn test_delete_review() {
    let app = TestApp::new().await;
    let (_, created) = app
        .send(Method::POST, "/reviews", Some(json!({"user": "ada@x.com"})))
        .await;
    let uri = format!("/reviews/{}", created["insertedId"].as_str().unwrap());

    let (status, deleted) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Review deleted successfully");
    assert_eq!(app.count("reviews").await, 0);

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_status_falls_back_to_pending() {
    let app = TestApp::new().await;

    let (status, created) = app
        .send(
            Method::POST,
            "/reviews",
            Some(json!({"user": "ada@x.com", "status": ""})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["review"]["status"], "Pending");
}
