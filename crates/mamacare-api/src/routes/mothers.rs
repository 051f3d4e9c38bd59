use axum::extract::{Path, State};

use mamacare_core::models::mother::{Mother, NewMother};
use mamacare_core::models::pregnancy::Pregnancy;
use mamacare_storage::{mothers, pregnancies};

use crate::error::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_mother(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewMother>,
) -> Result<ApiResponse<Mother>, ApiError> {
    if body.previous_pregnancies < 0 {
        return Err(ApiError::BadRequest(
            "previousPregnancies must not be negative".to_string(),
        ));
    }
    let conn = state.db.lock().await;
    let mother = mothers::insert_mother(&conn, &body)?;
    tracing::info!(mother_id = mother.id, "mother created");
    Ok(ApiResponse::created("Mother created successfully", mother))
}

pub async fn get_mother(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Mother>, ApiError> {
    let id = parse_id(&id, "mother ID")?;
    let conn = state.db.lock().await;
    let mother = mothers::get_mother(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Mother not found".to_string()))?;
    Ok(ApiResponse::ok(mother))
}

pub async fn list_pregnancies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vec<Pregnancy>>, ApiError> {
    let id = parse_id(&id, "mother ID")?;
    let conn = state.db.lock().await;
    if !mothers::mother_exists(&conn, id)? {
        return Err(ApiError::NotFound("Mother not found".to_string()));
    }
    let found = pregnancies::list_pregnancies_for_mother(&conn, id)?;
    Ok(ApiResponse::list(found))
}
