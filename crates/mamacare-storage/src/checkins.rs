use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use mamacare_core::models::checkin::{CheckinPatch, NewWeeklyCheckin, WeeklyCheckin};
use mamacare_core::risk::RiskAssessment;

use crate::error::StorageError;
use crate::row::parse_text;

const COLUMNS: &str = "id, pregnancy_id, week_number, checkin_date, \
    nausea_level, fatigue_level, back_pain, headache, dizziness, swelling, \
    vaginal_bleeding, blurred_vision, blood_pressure_systolic, blood_pressure_diastolic, \
    weight, temperature, fetal_movements_count, fetal_movement_notes, other_symptoms, \
    general_notes, risk_flag, risk_reason, created_at";

/// Insert a check-in with the risk fields already computed. Returns the stored row.
pub fn insert_checkin(
    conn: &Connection,
    pregnancy_id: i64,
    week_number: i32,
    body: &NewWeeklyCheckin,
    assessment: &RiskAssessment,
) -> Result<WeeklyCheckin, StorageError> {
    let sql = format!(
        "INSERT INTO weekly_checkins (
            pregnancy_id, week_number, checkin_date,
            nausea_level, fatigue_level, back_pain, headache, dizziness, swelling,
            vaginal_bleeding, blurred_vision, blood_pressure_systolic, blood_pressure_diastolic,
            weight, temperature, fetal_movements_count, fetal_movement_notes, other_symptoms,
            general_notes, risk_flag, risk_reason)
         VALUES (?1, ?2, COALESCE(?3, date('now')), ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                 ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)
         RETURNING {COLUMNS}"
    );

    let checkin = conn.query_row(
        &sql,
        params![
            pregnancy_id,
            week_number,
            body.checkin_date.map(|d| d.to_string()),
            body.nausea_level,
            body.fatigue_level,
            body.back_pain,
            body.headache,
            body.dizziness,
            body.swelling,
            body.vaginal_bleeding,
            body.blurred_vision,
            body.blood_pressure_systolic,
            body.blood_pressure_diastolic,
            body.weight,
            body.temperature,
            body.fetal_movements_count,
            body.fetal_movement_notes,
            body.other_symptoms,
            body.general_notes,
            assessment.risk_flag(),
            assessment.risk_reason(),
        ],
        row_to_checkin,
    )?;
    Ok(checkin)
}

pub fn get_checkin(conn: &Connection, id: i64) -> Result<Option<WeeklyCheckin>, StorageError> {
    let sql = format!("SELECT {COLUMNS} FROM weekly_checkins WHERE id = ?1");
    let checkin = conn
        .query_row(&sql, params![id], row_to_checkin)
        .optional()?;
    Ok(checkin)
}

/// Look up a check-in by its natural key.
pub fn get_checkin_by_week(
    conn: &Connection,
    pregnancy_id: i64,
    week_number: i32,
) -> Result<Option<WeeklyCheckin>, StorageError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM weekly_checkins
         WHERE pregnancy_id = ?1 AND week_number = ?2
         LIMIT 1"
    );
    let checkin = conn
        .query_row(&sql, params![pregnancy_id, week_number], row_to_checkin)
        .optional()?;
    Ok(checkin)
}

/// All check-ins, newest gestational week first.
pub fn list_checkins(conn: &Connection) -> Result<Vec<WeeklyCheckin>, StorageError> {
    let sql = format!("SELECT {COLUMNS} FROM weekly_checkins ORDER BY week_number DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_checkin)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
}

/// Check-ins of one pregnancy, newest gestational week first.
pub fn list_checkins_for_pregnancy(
    conn: &Connection,
    pregnancy_id: i64,
) -> Result<Vec<WeeklyCheckin>, StorageError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM weekly_checkins
         WHERE pregnancy_id = ?1
         ORDER BY week_number DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![pregnancy_id], row_to_checkin)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
}

/// Write the fields present in `patch` plus the recomputed risk fields.
/// Columns the patch does not mention are left as stored; a cleared field
/// is written as NULL.
pub fn update_checkin(
    conn: &Connection,
    id: i64,
    patch: &CheckinPatch,
    assessment: &RiskAssessment,
) -> Result<Option<WeeklyCheckin>, StorageError> {
    let mut set = Assignments::default();
    set.push("week_number", patch.week_number);
    set.push("checkin_date", patch.checkin_date.map(|d| d.to_string()));
    set.push("nausea_level", patch.nausea_level);
    set.push("fatigue_level", patch.fatigue_level);
    set.push("back_pain", patch.back_pain);
    set.push("headache", patch.headache);
    set.push("dizziness", patch.dizziness);
    set.push("swelling", patch.swelling);
    set.push("vaginal_bleeding", patch.vaginal_bleeding);
    set.push("blurred_vision", patch.blurred_vision);
    set.push("blood_pressure_systolic", patch.blood_pressure_systolic);
    set.push("blood_pressure_diastolic", patch.blood_pressure_diastolic);
    set.push("weight", patch.weight);
    set.push("temperature", patch.temperature);
    set.push("fetal_movements_count", patch.fetal_movements_count);
    set.push("fetal_movement_notes", patch.fetal_movement_notes.clone());
    set.push("other_symptoms", patch.other_symptoms.clone());
    set.push("general_notes", patch.general_notes.clone());
    set.push("risk_flag", Some(assessment.risk_flag()));
    set.push("risk_reason", Some(assessment.risk_reason()));

    let sql = format!(
        "UPDATE weekly_checkins SET {} WHERE id = ?{} RETURNING {COLUMNS}",
        set.clause(),
        set.values.len() + 1
    );
    set.values.push(Box::new(id));

    let checkin = conn
        .query_row(&sql, params_from_iter(set.values.iter()), row_to_checkin)
        .optional()?;
    Ok(checkin)
}

/// Delete a check-in, returning what was removed.
pub fn delete_checkin(conn: &Connection, id: i64) -> Result<Option<WeeklyCheckin>, StorageError> {
    let sql = format!("DELETE FROM weekly_checkins WHERE id = ?1 RETURNING {COLUMNS}");
    let checkin = conn
        .query_row(&sql, params![id], row_to_checkin)
        .optional()?;
    Ok(checkin)
}

#[derive(Default)]
struct Assignments {
    columns: Vec<&'static str>,
    values: Vec<Box<dyn ToSql>>,
}

impl Assignments {
    fn push<T: ToSql + 'static>(&mut self, column: &'static str, value: Option<T>) {
        if let Some(v) = value {
            self.columns.push(column);
            self.values.push(Box::new(v));
        }
    }

    fn clause(&self) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn row_to_checkin(row: &Row<'_>) -> rusqlite::Result<WeeklyCheckin> {
    Ok(WeeklyCheckin {
        id: row.get("id")?,
        pregnancy_id: row.get("pregnancy_id")?,
        week_number: row.get("week_number")?,
        checkin_date: parse_text(row, "checkin_date")?,
        nausea_level: row.get("nausea_level")?,
        fatigue_level: row.get("fatigue_level")?,
        back_pain: row.get("back_pain")?,
        headache: row.get("headache")?,
        dizziness: row.get("dizziness")?,
        swelling: row.get("swelling")?,
        vaginal_bleeding: row.get("vaginal_bleeding")?,
        blurred_vision: row.get("blurred_vision")?,
        blood_pressure_systolic: row.get("blood_pressure_systolic")?,
        blood_pressure_diastolic: row.get("blood_pressure_diastolic")?,
        weight: row.get("weight")?,
        temperature: row.get("temperature")?,
        fetal_movements_count: row.get("fetal_movements_count")?,
        fetal_movement_notes: row.get("fetal_movement_notes")?,
        other_symptoms: row.get("other_symptoms")?,
        general_notes: row.get("general_notes")?,
        risk_flag: row.get("risk_flag")?,
        risk_reason: row.get("risk_reason")?,
        created_at: parse_text(row, "created_at")?,
    })
}
