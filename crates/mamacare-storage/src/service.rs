//! Check-in lifecycle.
//!
//! Every create/update runs its existence check, duplicate check and write
//! inside one transaction. The `UNIQUE (pregnancy_id, week_number)` constraint
//! backs up the duplicate check; a violation is reported as a duplicate week.

use rusqlite::Connection;
use thiserror::Error;

use mamacare_core::error::CoreError;
use mamacare_core::models::checkin::{CheckinPatch, NewWeeklyCheckin, WeeklyCheckin};
use mamacare_core::models::pregnancy::{NewPregnancy, Pregnancy};
use mamacare_core::risk::{self, RiskAssessment};
use mamacare_core::summary::{self, WeeklySummaryEntry};

use crate::error::StorageError;
use crate::{checkins, mothers, pregnancies};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] CoreError),

    /// The record being created references a parent that does not exist.
    #[error("{entity} not found")]
    ParentNotFound { entity: &'static str, id: i64 },

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Check-in already exists for week {week_number}")]
    DuplicateWeek { pregnancy_id: i64, week_number: i32 },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<rusqlite::Error> for ServiceError {
    fn from(e: rusqlite::Error) -> Self {
        ServiceError::Storage(StorageError::from(e))
    }
}

const CHECKIN: &str = "Weekly check-in";
const PREGNANCY: &str = "Pregnancy";
const MOTHER: &str = "Mother";

/// Assess and store a new check-in.
pub fn create_checkin(
    conn: &mut Connection,
    body: &NewWeeklyCheckin,
) -> Result<WeeklyCheckin, ServiceError> {
    let (pregnancy_id, week_number) = body.validate()?;

    let tx = conn.transaction()?;

    if !pregnancies::pregnancy_exists(&tx, pregnancy_id)? {
        return Err(ServiceError::ParentNotFound {
            entity: PREGNANCY,
            id: pregnancy_id,
        });
    }
    if checkins::get_checkin_by_week(&tx, pregnancy_id, week_number)?.is_some() {
        return Err(ServiceError::DuplicateWeek {
            pregnancy_id,
            week_number,
        });
    }

    let assessment = risk::assess(&body.observation());
    let checkin = checkins::insert_checkin(&tx, pregnancy_id, week_number, body, &assessment)
        .map_err(|e| duplicate_week(e, pregnancy_id, week_number))?;
    tx.commit()?;

    tracing::info!(
        checkin_id = checkin.id,
        pregnancy_id,
        week_number,
        risk_level = %assessment.level,
        "weekly check-in created"
    );
    Ok(checkin)
}

/// Apply a patch and re-assess risk on the merged record.
///
/// Only the patched columns and the risk fields are written; the merge
/// exists solely to feed the assessor.
pub fn update_checkin(
    conn: &mut Connection,
    id: i64,
    patch: &CheckinPatch,
) -> Result<WeeklyCheckin, ServiceError> {
    patch.validate()?;

    let tx = conn.transaction()?;

    let current = checkins::get_checkin(&tx, id)?.ok_or(ServiceError::NotFound {
        entity: CHECKIN,
        id,
    })?;

    if let Some(week_number) = patch.week_number
        && week_number != current.week_number
        && checkins::get_checkin_by_week(&tx, current.pregnancy_id, week_number)?.is_some()
    {
        return Err(ServiceError::DuplicateWeek {
            pregnancy_id: current.pregnancy_id,
            week_number,
        });
    }

    let assessment = risk::assess(&patch.merged_observation(&current));
    let updated = checkins::update_checkin(&tx, id, patch, &assessment)
        .map_err(|e| {
            duplicate_week(
                e,
                current.pregnancy_id,
                patch.week_number.unwrap_or(current.week_number),
            )
        })?
        .ok_or(ServiceError::NotFound {
            entity: CHECKIN,
            id,
        })?;
    tx.commit()?;

    tracing::info!(
        checkin_id = id,
        risk_level = %assessment.level,
        risk_flag = updated.risk_flag,
        "weekly check-in updated"
    );
    Ok(updated)
}

/// Remove a check-in, returning the removed record.
pub fn delete_checkin(conn: &Connection, id: i64) -> Result<WeeklyCheckin, ServiceError> {
    let deleted = checkins::delete_checkin(conn, id)?.ok_or(ServiceError::NotFound {
        entity: CHECKIN,
        id,
    })?;
    tracing::info!(checkin_id = id, "weekly check-in deleted");
    Ok(deleted)
}

/// Re-run the assessor on a stored check-in, recommendations included.
pub fn assessment_for(conn: &Connection, id: i64) -> Result<RiskAssessment, ServiceError> {
    let checkin = checkins::get_checkin(conn, id)?.ok_or(ServiceError::NotFound {
        entity: CHECKIN,
        id,
    })?;
    Ok(risk::assess(&checkin.observation()))
}

/// Week-by-week summary of a pregnancy, newest week first. Empty when the
/// pregnancy has no check-ins.
pub fn weekly_summary(
    conn: &Connection,
    pregnancy_id: i64,
) -> Result<Vec<WeeklySummaryEntry>, ServiceError> {
    let checkins = checkins::list_checkins_for_pregnancy(conn, pregnancy_id)?;
    let entries = summary::summarize(&checkins);

    for entry in entries.iter().filter(|e| !e.is_consistent()) {
        tracing::warn!(
            pregnancy_id,
            week_number = entry.week_number,
            risk_flag = entry.risk_flag,
            risk_level = %entry.risk_level,
            "stored risk flag disagrees with recomputed level"
        );
    }

    Ok(entries)
}

pub fn create_pregnancy(
    conn: &mut Connection,
    body: &NewPregnancy,
) -> Result<Pregnancy, ServiceError> {
    body.validate()?;

    let tx = conn.transaction()?;
    if !mothers::mother_exists(&tx, body.mother_id)? {
        return Err(ServiceError::ParentNotFound {
            entity: MOTHER,
            id: body.mother_id,
        });
    }
    let pregnancy = pregnancies::insert_pregnancy(&tx, body)?;
    tx.commit()?;

    tracing::info!(
        pregnancy_id = pregnancy.id,
        mother_id = pregnancy.mother_id,
        "pregnancy created"
    );
    Ok(pregnancy)
}

fn duplicate_week(e: StorageError, pregnancy_id: i64, week_number: i32) -> ServiceError {
    match e {
        StorageError::UniqueViolation(_) => ServiceError::DuplicateWeek {
            pregnancy_id,
            week_number,
        },
        other => ServiceError::Storage(other),
    }
}
