//! Per-check-in symptom tallies used by the weekly summary.

use crate::models::checkin::CheckinObservation;
use crate::risk::{FETAL_MOVEMENTS_MIN, SYSTOLIC_HIGH};

/// Scale readings at or above this are moderate-to-severe and counted.
pub const SCALE_COUNTED_FROM: u8 = 3;

/// Number of reported symptoms, 0..=8: one per true boolean symptom flag,
/// plus nausea and fatigue when rated moderate or worse.
pub fn count_symptoms(obs: &CheckinObservation) -> u8 {
    let flags = [
        obs.back_pain,
        obs.headache,
        obs.dizziness,
        obs.swelling,
        obs.vaginal_bleeding,
        obs.blurred_vision,
    ];
    let scales = [obs.nausea_level, obs.fatigue_level];

    let flagged = flags.iter().filter(|f| **f).count();
    let scaled = scales
        .iter()
        .filter(|s| s.is_some_and(|v| v >= SCALE_COUNTED_FROM))
        .count();

    (flagged + scaled) as u8
}

/// Summary-view warning predicate.
///
/// Narrower than the risk rules on purpose: fever and a diastolic-only
/// reading do not count here.
pub fn has_warning_signs(obs: &CheckinObservation) -> bool {
    obs.vaginal_bleeding
        || obs.blurred_vision
        || obs.blood_pressure_systolic.is_some_and(|s| s >= SYSTOLIC_HIGH)
        || obs
            .fetal_movements_count
            .is_some_and(|c| c < FETAL_MOVEMENTS_MIN)
}
