//! Integration tests for the full API router.
//!
//! Each test builds the layered app over a freshly seeded store and drives
//! it with `oneshot`, the way the binary would serve it.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use skillwave::adapters::http::build_app;
use skillwave::adapters::InMemoryStore;
use skillwave::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(store: &InMemoryStore) -> Router {
    build_app(&ServerConfig::default(), store).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(store: &InMemoryStore, uri: &str) -> (StatusCode, Value) {
    send(
        app(store),
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(store: &InMemoryStore, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    send(
        app(store),
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap(),
    )
    .await
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn course_one_is_served_by_id() {
    let store = InMemoryStore::seeded();
    let (status, body) = get(&store, "/api/courses/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["category"], "Development");
}

#[tokio::test]
async fn every_listed_catalog_record_resolves_by_id() {
    let store = InMemoryStore::seeded();

    for collection in ["courses", "packages", "instructors"] {
        let (status, list) = get(&store, &format!("/api/{}", collection)).await;
        assert_eq!(status, StatusCode::OK);
        let listed = ids(&list);
        assert!(!listed.is_empty(), "{} should be seeded", collection);

        for id in listed {
            let (status, body) = get(&store, &format!("/api/{}/{}", collection, id)).await;
            assert_eq!(status, StatusCode::OK, "GET /api/{}/{}", collection, id);
            assert_eq!(body["id"], id.as_str());
        }
    }
}

#[tokio::test]
async fn exactly_five_packages() {
    let store = InMemoryStore::seeded();
    let (status, body) = get(&store, "/api/packages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));
    assert_eq!(body[0]["title"], "Grow Wave");
    assert_eq!(body[0]["courseIds"], json!(["1", "2", "3", "4", "5"]));
}

#[tokio::test]
async fn unknown_ids_are_404_with_message() {
    let store = InMemoryStore::seeded();
    for (uri, message) in [
        ("/api/courses/does-not-exist", "Course not found"),
        ("/api/packages/does-not-exist", "Package not found"),
        ("/api/instructors/does-not-exist", "Instructor not found"),
        ("/api/packages/does-not-exist/courses", "Package not found"),
    ] {
        let (status, body) = get(&store, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["message"], message, "{}", uri);
    }
}

#[tokio::test]
async fn empty_search_equals_omitted_search() {
    let store = InMemoryStore::seeded();
    let (_, omitted) = get(&store, "/api/courses").await;
    let (_, empty) = get(&store, "/api/courses?search=").await;
    assert_eq!(omitted, empty);

    let (_, by_category) = get(&store, "/api/courses?category=Finance").await;
    let (_, empty_with_category) = get(&store, "/api/courses?search=&category=Finance").await;
    assert_eq!(by_category, empty_with_category);
}

#[tokio::test]
async fn search_takes_precedence_over_category() {
    let store = InMemoryStore::seeded();
    let (status, body) = get(&store, "/api/courses?search=react&category=Finance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["4"]);
}

#[tokio::test]
async fn category_match_ignores_case() {
    let store = InMemoryStore::seeded();
    let (_, lower) = get(&store, "/api/courses?category=development").await;
    let (_, proper) = get(&store, "/api/courses?category=Development").await;

    assert_eq!(lower, proper);
    assert_eq!(ids(&lower), vec!["1", "4", "9"]);
}

#[tokio::test]
async fn package_courses_resolve_in_order() {
    let store = InMemoryStore::seeded();
    let (status, body) = get(&store, "/api/packages/2/courses").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["4", "8", "9", "10", "11", "12", "1", "2"]);
}

// =============================================================================
// Learner and outreach writes
// =============================================================================

#[tokio::test]
async fn enrollment_without_target_is_400() {
    let store = InMemoryStore::seeded();
    let (status, body) = post(&store, "/api/enrollments", json!({ "userId": "u1" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn enrollment_with_both_targets_is_400() {
    let store = InMemoryStore::seeded();
    let (status, body) = post(
        &store,
        "/api/enrollments",
        json!({ "userId": "u1", "packageId": "1", "courseId": "1" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn enrollments_are_listed_per_user() {
    let store = InMemoryStore::seeded();
    post(&store, "/api/enrollments", json!({ "userId": "u1", "packageId": "1" }).to_string()).await;
    post(&store, "/api/enrollments", json!({ "userId": "u2", "courseId": "3" }).to_string()).await;

    let (status, body) = get(&store, "/api/users/u1/enrollments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["packageId"], "1");
    assert!(body[0]["courseId"].is_null());

    let (_, none) = get(&store, "/api/users/nobody/enrollments").await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn newsletter_subscribe_is_idempotent() {
    let store = InMemoryStore::seeded();
    let payload = json!({ "email": "learner@example.com" }).to_string();

    let (status, first) = post(&store, "/api/newsletter", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = post(&store, "/api/newsletter", payload).await;

    assert_eq!(first["newsletter"]["id"], second["newsletter"]["id"]);
    assert_eq!(store.newsletters.len().await, 1);
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let store = InMemoryStore::seeded();
    let (status, body) = post(&store, "/api/newsletter", json!({ "email": "nope" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email address");
}

#[tokio::test]
async fn malformed_json_is_400_with_message() {
    let store = InMemoryStore::seeded();
    let (status, body) = post(&store, "/api/enrollments", "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn duplicate_registration_is_409() {
    let store = InMemoryStore::seeded();
    let first = json!({ "username": "ada", "email": "ada@example.com", "password": "pw" });
    let same_email = json!({ "username": "grace", "email": "ada@example.com", "password": "pw" });

    let (status, body) = post(&store, "/api/users", first.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["user"]["id"].is_string());

    let (status, body) = post(&store, "/api/users", first.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already taken");

    let (status, body) = post(&store, "/api/users", same_email.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn contact_form_acknowledges_complete_submission() {
    let store = InMemoryStore::seeded();
    let (status, body) = post(
        &store,
        "/api/contact",
        json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello", "subject": "Hi" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact form submitted successfully");
}

// =============================================================================
// Service surface
// =============================================================================

#[tokio::test]
async fn health_and_fallback() {
    let store = InMemoryStore::new();
    let (status, body) = get(&store, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(&store, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn middleware_rejections_use_message_body() {
    let store = InMemoryStore::seeded();
    let oversized = json!({ "email": "x".repeat(70 * 1024) }).to_string();

    let (status, body) = post(&store, "/api/newsletter", oversized).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "Request body too large");

    let (status, body) = send(
        app(&store),
        Request::builder()
            .method("DELETE")
            .uri("/api/courses")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");
}
