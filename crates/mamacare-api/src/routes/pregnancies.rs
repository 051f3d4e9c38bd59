use axum::extract::{Path, State};

use mamacare_core::models::pregnancy::{NewPregnancy, Pregnancy};
use mamacare_storage::{pregnancies, service};

use crate::error::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::response::ApiResponse;
use crate::state::AppState;

pub async fn create_pregnancy(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPregnancy>,
) -> Result<ApiResponse<Pregnancy>, ApiError> {
    let mut conn = state.db.lock().await;
    let pregnancy = service::create_pregnancy(&mut conn, &body)?;
    Ok(ApiResponse::created("Pregnancy created successfully", pregnancy))
}

pub async fn get_pregnancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Pregnancy>, ApiError> {
    let id = parse_id(&id, "pregnancy ID")?;
    let conn = state.db.lock().await;
    let pregnancy = pregnancies::get_pregnancy(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Pregnancy not found".to_string()))?;
    Ok(ApiResponse::ok(pregnancy))
}
