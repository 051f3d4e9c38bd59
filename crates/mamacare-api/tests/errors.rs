use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;

use mamacare_api::error::ApiError;
use mamacare_storage::error::StorageError;
use mamacare_storage::service::ServiceError;

async fn render(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn storage_failures_hide_their_detail() {
    let err = ApiError::from(StorageError::ForeignKeyViolation(
        "FOREIGN KEY constraint failed".to_string(),
    ));

    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "internal server error");
}

#[tokio::test]
async fn missing_record_maps_to_not_found() {
    let err = ApiError::from(ServiceError::NotFound {
        entity: "Weekly check-in",
        id: 4,
    });

    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Weekly check-in not found");
}

#[tokio::test]
async fn duplicate_week_maps_to_bad_request() {
    let err = ApiError::from(ServiceError::DuplicateWeek {
        pregnancy_id: 1,
        week_number: 12,
    });

    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Check-in already exists for week 12");
}
