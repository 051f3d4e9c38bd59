use axum::extract::{Path, State};

use mamacare_core::models::checkin::{CheckinPatch, NewWeeklyCheckin, WeeklyCheckin};
use mamacare_core::risk::RiskAssessment;
use mamacare_core::summary::WeeklySummaryEntry;
use mamacare_storage::{checkins, service};

use crate::error::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::response::ApiResponse;
use crate::state::AppState;

const CHECKIN_ID: &str = "check-in ID";
const PREGNANCY_ID: &str = "pregnancy ID";

pub async fn list_checkins(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<WeeklyCheckin>>, ApiError> {
    let conn = state.db.lock().await;
    let all = checkins::list_checkins(&conn)?;
    if all.is_empty() {
        return Err(ApiError::NotFound("No weekly check-ins found".to_string()));
    }
    Ok(ApiResponse::list(all))
}

pub async fn get_checkin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<WeeklyCheckin>, ApiError> {
    let id = parse_id(&id, CHECKIN_ID)?;
    let conn = state.db.lock().await;
    let checkin = checkins::get_checkin(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Weekly check-in not found".to_string()))?;
    Ok(ApiResponse::ok(checkin))
}

pub async fn list_checkins_for_pregnancy(
    State(state): State<AppState>,
    Path(pregnancy_id): Path<String>,
) -> Result<ApiResponse<Vec<WeeklyCheckin>>, ApiError> {
    let pregnancy_id = parse_id(&pregnancy_id, PREGNANCY_ID)?;
    let conn = state.db.lock().await;
    let found = checkins::list_checkins_for_pregnancy(&conn, pregnancy_id)?;
    if found.is_empty() {
        return Err(ApiError::NotFound(
            "No weekly check-ins found for this pregnancy".to_string(),
        ));
    }
    Ok(ApiResponse::list(found))
}

pub async fn get_checkin_by_week(
    State(state): State<AppState>,
    Path((pregnancy_id, week_number)): Path<(String, String)>,
) -> Result<ApiResponse<WeeklyCheckin>, ApiError> {
    let invalid = || ApiError::BadRequest("Invalid pregnancy ID or week number".to_string());
    let pregnancy_id: i64 = pregnancy_id.trim().parse().map_err(|_| invalid())?;
    let week_number: i32 = week_number.trim().parse().map_err(|_| invalid())?;

    let conn = state.db.lock().await;
    let checkin = checkins::get_checkin_by_week(&conn, pregnancy_id, week_number)?
        .ok_or_else(|| ApiError::NotFound("Weekly check-in not found for this week".to_string()))?;
    Ok(ApiResponse::ok(checkin))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<RiskAssessment>, ApiError> {
    let id = parse_id(&id, CHECKIN_ID)?;
    let conn = state.db.lock().await;
    let assessment = service::assessment_for(&conn, id)?;
    Ok(ApiResponse::ok(assessment))
}

pub async fn weekly_summary(
    State(state): State<AppState>,
    Path(pregnancy_id): Path<String>,
) -> Result<ApiResponse<Vec<WeeklySummaryEntry>>, ApiError> {
    let pregnancy_id = parse_id(&pregnancy_id, PREGNANCY_ID)?;
    let conn = state.db.lock().await;
    let summary = service::weekly_summary(&conn, pregnancy_id)?;
    Ok(ApiResponse::ok(summary))
}

pub async fn create_checkin(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewWeeklyCheckin>,
) -> Result<ApiResponse<WeeklyCheckin>, ApiError> {
    let mut conn = state.db.lock().await;
    let checkin = service::create_checkin(&mut conn, &body)?;
    Ok(ApiResponse::created(
        "Weekly check-in created successfully",
        checkin,
    ))
}

pub async fn update_checkin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<CheckinPatch>,
) -> Result<ApiResponse<WeeklyCheckin>, ApiError> {
    let id = parse_id(&id, CHECKIN_ID)?;
    let mut conn = state.db.lock().await;
    let updated = service::update_checkin(&mut conn, id, &patch)?;
    Ok(ApiResponse::ok(updated).message("Weekly check-in updated successfully"))
}

pub async fn delete_checkin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<WeeklyCheckin>, ApiError> {
    let id = parse_id(&id, CHECKIN_ID)?;
    let conn = state.db.lock().await;
    let deleted = service::delete_checkin(&conn, id)?;
    Ok(ApiResponse::ok(deleted).message("Weekly check-in deleted successfully"))
}
