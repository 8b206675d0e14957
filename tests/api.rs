use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mergington_activities::database::ActivityRegistry;
use mergington_activities::web::app::build_router;

fn create_test_router() -> Router {
    build_router(Arc::new(ActivityRegistry::seeded()), "static")
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn signup(app: &Router, activity: &str, email: &str) -> Response {
    let uri = format!(
        "/activities/{}/signup?email={}",
        activity.replace(' ', "%20"),
        email
    );
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let data = body_json(get(app, "/activities").await).await;
    serde_json::from_value(data[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn test_get_activities_lists_seeded_activities() {
    let app = create_test_router();
    let response = get(&app, "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    let activities = data.as_object().unwrap();
    for name in ["Chess Club", "Programming Class", "Basketball Team"] {
        assert!(activities.contains_key(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_get_activities_contains_required_fields() {
    let app = create_test_router();
    let data = body_json(get(&app, "/activities").await).await;

    for (name, activity) in data.as_object().unwrap() {
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(activity.get(field).is_some(), "{name} lacks {field}");
        }
        assert!(activity["participants"].is_array());
    }
}

#[tokio::test]
async fn test_get_activities_keeps_seed_order() {
    let app = create_test_router();
    let data = body_json(get(&app, "/activities").await).await;

    let names: Vec<&String> = data.as_object().unwrap().keys().collect();
    assert_eq!(names.first().map(|s| s.as_str()), Some("Chess Club"));
}

#[tokio::test]
async fn test_signup_success() {
    let app = create_test_router();
    let response = signup(&app, "Chess Club", "newstudent@mergington.edu").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    let message = data["message"].as_str().unwrap();
    assert!(message.contains("newstudent@mergington.edu"));
    assert!(message.contains("Chess Club"));
}

#[tokio::test]
async fn test_signup_adds_participant() {
    let app = create_test_router();
    let email = "testuser@mergington.edu";
    let before = participants(&app, "Science Club").await;

    let response = signup(&app, "Science Club", email).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = participants(&app, "Science Club").await;
    assert!(after.contains(&email.to_string()));
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(String::as_str), Some(email));
}

#[tokio::test]
async fn test_signup_nonexistent_activity() {
    let app = create_test_router();
    let response = signup(&app, "Nonexistent Activity", "student@mergington.edu").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = body_json(response).await;
    let detail = data["detail"].as_str().unwrap();
    assert!(detail.to_lowercase().contains("not found"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = create_test_router();
    let response = signup(&app, "Chess Club", "michael@mergington.edu").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = body_json(response).await;
    let detail = data["detail"].as_str().unwrap();
    assert!(detail.to_lowercase().contains("already signed up"));
}

#[tokio::test]
async fn test_signup_twice_succeeds_then_fails() {
    let app = create_test_router();
    let email = "repeat@mergington.edu";

    assert_eq!(signup(&app, "Drama Club", email).await.status(), StatusCode::OK);
    assert_eq!(
        signup(&app, "Drama Club", email).await.status(),
        StatusCode::BAD_REQUEST
    );

    let roster = participants(&app, "Drama Club").await;
    assert_eq!(roster.iter().filter(|p| p.as_str() == email).count(), 1);
}

#[tokio::test]
async fn test_signup_different_activity_same_email() {
    let app = create_test_router();
    let email = "multiplesignups@mergington.edu";

    assert_eq!(signup(&app, "Chess Club", email).await.status(), StatusCode::OK);
    assert_eq!(
        signup(&app, "Programming Class", email).await.status(),
        StatusCode::OK
    );

    assert!(participants(&app, "Chess Club").await.contains(&email.to_string()));
    assert!(participants(&app, "Programming Class")
        .await
        .contains(&email.to_string()));
}

#[tokio::test]
async fn test_signup_without_email_is_rejected() {
    let app = create_test_router();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/activities/Chess%20Club/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(participants(&app, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn test_concurrent_duplicate_signups_admit_one() {
    let app = create_test_router();
    let email = "race@mergington.edu";

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { signup(&app, "Gym Class", email).await.status() })
        })
        .collect();

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            ok += 1;
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(participants(&app, "Gym Class").await.len(), 3);
}

#[tokio::test]
async fn test_root_redirect() {
    let app = create_test_router();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_static_landing_page_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Mergington</h1>").unwrap();
    let app = build_router(Arc::new(ActivityRegistry::seeded()), dir.path());

    let response = get(&app, "/static/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<h1>Mergington</h1>");

    let missing = get(&app, "/static/missing.html").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
