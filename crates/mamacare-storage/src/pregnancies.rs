use rusqlite::{params, Connection, OptionalExtension, Row};

use mamacare_core::models::pregnancy::{NewPregnancy, Pregnancy};

use crate::error::StorageError;
use crate::row::parse_text;

const COLUMNS: &str = "id, mother_id, lmp_date, edd_date, current_trimester, \
    pregnancy_number, is_active, outcome, notes, created_at";

pub fn insert_pregnancy(conn: &Connection, body: &NewPregnancy) -> Result<Pregnancy, StorageError> {
    let sql = format!(
        "INSERT INTO pregnancies (
            mother_id, lmp_date, edd_date, current_trimester, pregnancy_number, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING {COLUMNS}"
    );
    let pregnancy = conn.query_row(
        &sql,
        params![
            body.mother_id,
            body.lmp_date.to_string(),
            body.edd_date.to_string(),
            body.current_trimester,
            body.pregnancy_number,
            body.notes,
        ],
        row_to_pregnancy,
    )?;
    Ok(pregnancy)
}

pub fn get_pregnancy(conn: &Connection, id: i64) -> Result<Option<Pregnancy>, StorageError> {
    let sql = format!("SELECT {COLUMNS} FROM pregnancies WHERE id = ?1");
    let pregnancy = conn
        .query_row(&sql, params![id], row_to_pregnancy)
        .optional()?;
    Ok(pregnancy)
}

/// Pregnancies of one mother, most recent LMP first.
pub fn list_pregnancies_for_mother(
    conn: &Connection,
    mother_id: i64,
) -> Result<Vec<Pregnancy>, StorageError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM pregnancies
         WHERE mother_id = ?1
         ORDER BY lmp_date DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![mother_id], row_to_pregnancy)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
}

pub fn pregnancy_exists(conn: &Connection, id: i64) -> Result<bool, StorageError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM pregnancies WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn row_to_pregnancy(row: &Row<'_>) -> rusqlite::Result<Pregnancy> {
    Ok(Pregnancy {
        id: row.get("id")?,
        mother_id: row.get("mother_id")?,
        lmp_date: parse_text(row, "lmp_date")?,
        edd_date: parse_text(row, "edd_date")?,
        current_trimester: row.get("current_trimester")?,
        pregnancy_number: row.get("pregnancy_number")?,
        is_active: row.get("is_active")?,
        outcome: parse_text(row, "outcome")?,
        notes: row.get("notes")?,
        created_at: parse_text(row, "created_at")?,
    })
}
