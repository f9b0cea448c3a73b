//! End-to-end CRUD tests against a real PostgreSQL database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p pms-server -- --ignored

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pms_core::SslMode;
use pms_server::{build_router, create_pool, schema, AppState, PoolSettings};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn app() -> Router {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let settings = PoolSettings {
        database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL required"),
        ssl_mode: SslMode::Prefer,
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
    };
    let pool = create_pool(&settings).await.expect("pool creation failed");
    schema::init(&pool).await.expect("schema init failed");

    build_router(AppState { pool }, false)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn listed(items: &Value, key: &str, id: &Value) -> Option<Value> {
    items
        .as_array()
        .unwrap()
        .iter()
        .find(|item| &item[key] == id)
        .cloned()
}

async fn create_user(app: &Router, role: &str) -> Value {
    let email = format!("{}@example.test", Uuid::new_v4());
    let (status, user) = call(
        app,
        Method::POST,
        "/users",
        Some(json!({ "email": email, "passwordHash": "hash", "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user
}

async fn create_loft(app: &Router) -> Value {
    let (status, property) = call(
        app,
        Method::POST,
        "/properties",
        Some(json!({
            "title": "Loft",
            "location": { "address": "1 Main St", "latitude": 1.0, "longitude": 2.0 },
            "price": 1000,
            "type": "apartment",
            "size": 50
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    property
}

#[tokio::test]
#[ignore = "requires database"]
async fn property_lifecycle() {
    let app = app().await;

    let loft = create_loft(&app).await;
    let id = loft["propertyId"].clone();
    assert!(!id.as_str().unwrap().is_empty());
    assert_eq!(loft["amenities"], json!([]));
    assert_eq!(loft["images"], json!([]));
    assert_eq!(loft["description"], "");
    assert!(!loft["createdAt"].as_str().unwrap().is_empty());

    let (status, all) = call(&app, Method::GET, "/properties", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed(&all, "propertyId", &id), Some(loft.clone()));

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/properties",
        Some(json!({ "propertyId": id, "price": 1200 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 1200.0);
    assert_eq!(updated["title"], "Loft");
    assert_eq!(updated["location"], loft["location"]);

    let (status, deleted) = call(
        &app,
        Method::DELETE,
        "/properties",
        Some(json!({ "propertyId": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    let (_, all) = call(&app, Method::GET, "/properties", None).await;
    assert_eq!(listed(&all, "propertyId", &id), None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_columns_round_trip_as_arrays() {
    let app = app().await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/properties",
        Some(json!({
            "title": "Villa",
            "location": { "address": "2 Hill Rd", "latitude": 0.0, "longitude": 0.0 },
            "price": 5000,
            "type": "house",
            "size": 200,
            "amenities": ["pool", "gym"],
            "images": ["a.jpg"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, all) = call(&app, Method::GET, "/properties", None).await;
    let villa = listed(&all, "propertyId", &created["propertyId"]).unwrap();
    assert_eq!(villa["amenities"], json!(["pool", "gym"]));
    assert_eq!(villa["images"], json!(["a.jpg"]));
    assert_eq!(villa["location"]["latitude"], 0.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_update_is_a_merge_patch() {
    let app = app().await;
    let user = create_user(&app, "tenant").await;

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/users",
        Some(json!({ "userId": user["userId"], "role": "landlord" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "landlord");
    assert_eq!(updated["email"], user["email"]);
    assert_eq!(updated["passwordHash"], user["passwordHash"]);
    assert_eq!(updated["createdAt"], user["createdAt"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn review_rating_update_keeps_comment() {
    let app = app().await;
    let user = create_user(&app, "tenant").await;
    let loft = create_loft(&app).await;

    let (status, review) = call(
        &app,
        Method::POST,
        "/reviews",
        Some(json!({
            "propertyId": loft["propertyId"],
            "userId": user["userId"],
            "rating": 3,
            "comment": "Drafty windows"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/reviews",
        Some(json!({ "reviewId": review["reviewId"], "rating": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], 5.0);
    assert_eq!(updated["comment"], "Drafty windows");
}

#[tokio::test]
#[ignore = "requires database"]
async fn lease_and_maintenance_request_lifecycle() {
    let app = app().await;
    let tenant = create_user(&app, "tenant").await;
    let loft = create_loft(&app).await;

    let (status, lease) = call(
        &app,
        Method::POST,
        "/leases",
        Some(json!({
            "propertyId": loft["propertyId"],
            "tenantId": tenant["userId"],
            "startDate": "2024-03-01",
            "endDate": "2025-02-28T00:00:00Z",
            "monthlyRent": 1500,
            "paymentFrequency": "monthly"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lease["startDate"], "2024-03-01");
    assert_eq!(lease["endDate"], "2025-02-28");

    let (status, request) = call(
        &app,
        Method::POST,
        "/maintenance-requests",
        Some(json!({
            "propertyId": loft["propertyId"],
            "tenantId": tenant["userId"],
            "description": "Leaky tap",
            "status": "pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, completed) = call(
        &app,
        Method::PUT,
        "/maintenance-requests",
        Some(json!({ "requestId": request["requestId"], "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "completed");
    assert_eq!(completed["description"], "Leaky tap");

    // Deleting the property cascades to its lease and maintenance request
    call(
        &app,
        Method::DELETE,
        "/properties",
        Some(json!({ "propertyId": loft["propertyId"] })),
    )
    .await;

    let (_, leases) = call(&app, Method::GET, "/leases", None).await;
    assert_eq!(listed(&leases, "leaseId", &lease["leaseId"]), None);
    let (_, requests) = call(&app, Method::GET, "/maintenance-requests", None).await;
    assert_eq!(listed(&requests, "requestId", &request["requestId"]), None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_of_unknown_id_is_404() {
    let app = app().await;
    let missing = Uuid::new_v4().to_string();

    let cases = [
        ("/users", json!({ "userId": missing, "email": "x@y.z" }), "User not found"),
        ("/properties", json!({ "propertyId": missing, "price": 1 }), "Property not found"),
        ("/leases", json!({ "leaseId": missing, "monthlyRent": 1 }), "Lease not found"),
        (
            "/maintenance-requests",
            json!({ "requestId": missing, "status": "completed" }),
            "Maintenance request not found",
        ),
        ("/reviews", json!({ "reviewId": missing, "rating": 1 }), "Review not found"),
    ];

    for (uri, body, message) in cases {
        let (status, response) = call(&app, Method::PUT, uri, Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(response, json!({ "error": message }));
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_is_idempotent() {
    let app = app().await;
    let user = create_user(&app, "admin").await;
    let body = json!({ "userId": user["userId"] });

    for _ in 0..2 {
        let (status, response) = call(&app, Method::DELETE, "/users", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "success": true }));
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_email_is_a_storage_error() {
    let app = app().await;
    let user = create_user(&app, "tenant").await;

    let (status, response) = call(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": user["email"], "passwordHash": "other", "role": "tenant" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "Failed to create user");
}
