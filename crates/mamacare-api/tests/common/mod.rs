#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use mamacare_api::router;
use mamacare_api::state::AppState;
use mamacare_storage::db::open_memory_database;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn test_app() -> Router {
    router(AppState::new(open_memory_database().unwrap()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create a mother and a pregnancy through the API. Returns the pregnancy id.
pub async fn seed_pregnancy(app: &Router) -> i64 {
    let mother = post(
        app,
        "/api/mothers",
        json!({ "userId": 11, "bloodGroup": "A", "previousPregnancies": 0 }),
    )
    .await;
    assert_eq!(mother.status, StatusCode::CREATED);
    let mother_id = mother.body["data"]["id"].as_i64().unwrap();

    let pregnancy = post(
        app,
        "/api/pregnancies",
        json!({
            "motherId": mother_id,
            "lmpDate": "2025-02-03",
            "eddDate": "2025-11-10",
            "currentTrimester": 2
        }),
    )
    .await;
    assert_eq!(pregnancy.status, StatusCode::CREATED);
    pregnancy.body["data"]["id"].as_i64().unwrap()
}

/// Create a check-in and return its id.
pub async fn create_checkin(app: &Router, body: Value) -> i64 {
    let res = post(app, "/api/weeks", body).await;
    assert_eq!(res.status, StatusCode::CREATED, "body: {}", res.body);
    res.body["data"]["id"].as_i64().unwrap()
}
