use rusqlite::{params, Connection, OptionalExtension, Row};

use mamacare_core::models::mother::{Mother, NewMother};

use crate::error::StorageError;
use crate::row::parse_text;

const COLUMNS: &str = "id, user_id, blood_group, rh_factor, known_allergies, \
    previous_pregnancies, emergency_contact_name, emergency_contact_phone, created_at";

pub fn insert_mother(conn: &Connection, body: &NewMother) -> Result<Mother, StorageError> {
    let sql = format!(
        "INSERT INTO mothers (
            user_id, blood_group, rh_factor, known_allergies, previous_pregnancies,
            emergency_contact_name, emergency_contact_phone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         RETURNING {COLUMNS}"
    );
    let mother = conn.query_row(
        &sql,
        params![
            body.user_id,
            body.blood_group,
            body.rh_factor,
            body.known_allergies,
            body.previous_pregnancies,
            body.emergency_contact_name,
            body.emergency_contact_phone,
        ],
        row_to_mother,
    )?;
    Ok(mother)
}

pub fn get_mother(conn: &Connection, id: i64) -> Result<Option<Mother>, StorageError> {
    let sql = format!("SELECT {COLUMNS} FROM mothers WHERE id = ?1");
    let mother = conn.query_row(&sql, params![id], row_to_mother).optional()?;
    Ok(mother)
}

pub fn mother_exists(conn: &Connection, id: i64) -> Result<bool, StorageError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM mothers WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn row_to_mother(row: &Row<'_>) -> rusqlite::Result<Mother> {
    Ok(Mother {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        blood_group: row.get("blood_group")?,
        rh_factor: row.get("rh_factor")?,
        known_allergies: row.get("known_allergies")?,
        previous_pregnancies: row.get("previous_pregnancies")?,
        emergency_contact_name: row.get("emergency_contact_name")?,
        emergency_contact_phone: row.get("emergency_contact_phone")?,
        created_at: parse_text(row, "created_at")?,
    })
}
