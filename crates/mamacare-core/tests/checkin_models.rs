use jiff::civil::date;

use mamacare_core::error::CoreError;
use mamacare_core::models::checkin::{CheckinPatch, NewWeeklyCheckin, WeeklyCheckin};
use mamacare_core::models::pregnancy::{NewPregnancy, PregnancyOutcome};

fn stored() -> WeeklyCheckin {
    WeeklyCheckin {
        id: 1,
        pregnancy_id: 1,
        week_number: 20,
        checkin_date: date(2025, 6, 2),
        nausea_level: Some(2),
        fatigue_level: None,
        back_pain: true,
        headache: false,
        dizziness: false,
        swelling: false,
        vaginal_bleeding: false,
        blurred_vision: false,
        blood_pressure_systolic: Some(120),
        blood_pressure_diastolic: Some(80),
        weight: Some(64.5),
        temperature: Some(36.8),
        fetal_movements_count: Some(14),
        fetal_movement_notes: None,
        other_symptoms: None,
        general_notes: None,
        risk_flag: false,
        risk_reason: String::new(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn create_body_requires_natural_key() {
    let body = NewWeeklyCheckin::default();
    assert_eq!(body.validate(), Err(CoreError::MissingField("pregnancyId")));

    let body = NewWeeklyCheckin {
        pregnancy_id: Some(1),
        ..Default::default()
    };
    assert_eq!(body.validate(), Err(CoreError::MissingField("weekNumber")));

    let body = NewWeeklyCheckin {
        pregnancy_id: Some(1),
        week_number: Some(0),
        ..Default::default()
    };
    assert!(matches!(body.validate(), Err(CoreError::NotPositive { .. })));

    let body = NewWeeklyCheckin {
        pregnancy_id: Some(4),
        week_number: Some(12),
        ..Default::default()
    };
    assert_eq!(body.validate(), Ok((4, 12)));
}

#[test]
fn scales_outside_one_to_five_are_rejected() {
    let body = NewWeeklyCheckin {
        pregnancy_id: Some(1),
        week_number: Some(12),
        nausea_level: Some(6),
        ..Default::default()
    };
    assert!(matches!(
        body.validate(),
        Err(CoreError::OutOfRange { field: "nauseaLevel", .. })
    ));

    let patch = CheckinPatch {
        fatigue_level: Some(Some(0)),
        ..Default::default()
    };
    assert!(matches!(
        patch.validate(),
        Err(CoreError::OutOfRange { field: "fatigueLevel", .. })
    ));
}

#[test]
fn create_body_flags_default_to_false() {
    let body: NewWeeklyCheckin =
        serde_json::from_str(r#"{"pregnancyId": 1, "weekNumber": 10, "headache": true}"#).unwrap();
    assert!(body.headache);
    assert!(!body.vaginal_bleeding);
    assert!(!body.blurred_vision);
    assert_eq!(body.temperature, None);
}

#[test]
fn patch_fields_win_over_stored_values() {
    let patch = CheckinPatch {
        blood_pressure_diastolic: Some(Some(95)),
        back_pain: Some(false),
        ..Default::default()
    };
    let merged = patch.merged_observation(&stored());
    assert_eq!(merged.blood_pressure_diastolic, Some(95));
    assert_eq!(merged.blood_pressure_systolic, Some(120));
    assert!(!merged.back_pain);
    assert_eq!(merged.nausea_level, Some(2));
    assert_eq!(merged.fetal_movements_count, Some(14));
}

#[test]
fn patch_null_clears_and_absent_keeps() {
    let patch: CheckinPatch =
        serde_json::from_str(r#"{"bloodPressureSystolic": null, "temperature": 37.9}"#).unwrap();
    assert_eq!(patch.blood_pressure_systolic, Some(None));
    assert_eq!(patch.temperature, Some(Some(37.9)));
    assert_eq!(patch.fetal_movements_count, None);

    let merged = patch.merged_observation(&stored());
    assert_eq!(merged.blood_pressure_systolic, None);
    assert_eq!(merged.temperature, Some(37.9));
    assert_eq!(merged.fetal_movements_count, Some(14));
}

#[test]
fn patch_null_on_required_field_is_ignored() {
    let patch: CheckinPatch =
        serde_json::from_str(r#"{"weekNumber": null, "headache": null}"#).unwrap();
    assert_eq!(patch, CheckinPatch::default());
}

#[test]
fn empty_patch_reproduces_stored_observation() {
    let current = stored();
    assert_eq!(
        CheckinPatch::default().merged_observation(&current),
        current.observation()
    );
}

#[test]
fn pregnancy_trimester_bounds() {
    let mut body = NewPregnancy {
        mother_id: 1,
        lmp_date: date(2025, 1, 1),
        edd_date: date(2025, 10, 8),
        current_trimester: Some(2),
        pregnancy_number: None,
        notes: None,
    };
    assert!(body.validate().is_ok());
    body.current_trimester = Some(4);
    assert!(body.validate().is_err());
}

#[test]
fn outcome_round_trips_through_str() {
    for outcome in [
        PregnancyOutcome::Ongoing,
        PregnancyOutcome::Delivered,
        PregnancyOutcome::Miscarriage,
        PregnancyOutcome::Terminated,
    ] {
        assert_eq!(outcome.as_str().parse::<PregnancyOutcome>(), Ok(outcome));
    }
    assert!("unknown".parse::<PregnancyOutcome>().is_err());
}
