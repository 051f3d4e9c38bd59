#![allow(dead_code)]

use jiff::civil::date;
use rusqlite::Connection;

use mamacare_core::models::checkin::NewWeeklyCheckin;
use mamacare_core::models::mother::NewMother;
use mamacare_core::models::pregnancy::NewPregnancy;
use mamacare_storage::db::open_memory_database;
use mamacare_storage::{mothers, service};

pub fn test_db() -> Connection {
    open_memory_database().unwrap()
}

/// Insert a mother and one pregnancy. Returns the pregnancy id.
pub fn seed_pregnancy(conn: &mut Connection) -> i64 {
    let mother = mothers::insert_mother(
        conn,
        &NewMother {
            user_id: 7,
            blood_group: Some("O".to_string()),
            rh_factor: Some("positive".to_string()),
            known_allergies: None,
            previous_pregnancies: 1,
            emergency_contact_name: Some("Wanjiru".to_string()),
            emergency_contact_phone: Some("+254700000000".to_string()),
        },
    )
    .unwrap();

    service::create_pregnancy(
        conn,
        &NewPregnancy {
            mother_id: mother.id,
            lmp_date: date(2025, 1, 6),
            edd_date: date(2025, 10, 13),
            current_trimester: Some(1),
            pregnancy_number: Some(2),
            notes: None,
        },
    )
    .unwrap()
    .id
}

pub fn new_checkin(pregnancy_id: i64, week: i32) -> NewWeeklyCheckin {
    NewWeeklyCheckin {
        pregnancy_id: Some(pregnancy_id),
        week_number: Some(week),
        ..Default::default()
    }
}
