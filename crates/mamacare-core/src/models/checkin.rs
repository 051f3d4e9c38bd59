use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Inclusive bounds of the nausea and fatigue self-report scales.
pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;

/// A stored weekly check-in. At most one exists per (pregnancy, week).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklyCheckin {
    pub id: i64,
    pub pregnancy_id: i64,
    pub week_number: i32,
    pub checkin_date: jiff::civil::Date,

    // Symptoms
    pub nausea_level: Option<u8>,
    pub fatigue_level: Option<u8>,
    pub back_pain: bool,
    pub headache: bool,
    pub dizziness: bool,
    pub swelling: bool,
    pub vaginal_bleeding: bool,
    pub blurred_vision: bool,

    // Vitals
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub weight: Option<f64>,
    pub temperature: Option<f64>,

    pub fetal_movements_count: Option<i32>,
    pub fetal_movement_notes: Option<String>,
    pub other_symptoms: Option<String>,
    pub general_notes: Option<String>,

    /// Set only by the risk assessor: true iff the assessed level is high.
    pub risk_flag: bool,
    /// Triggered rule descriptions joined with ", ". Empty for low risk.
    pub risk_reason: String,

    pub created_at: jiff::Timestamp,
}

impl WeeklyCheckin {
    pub fn observation(&self) -> CheckinObservation {
        CheckinObservation {
            vaginal_bleeding: self.vaginal_bleeding,
            blurred_vision: self.blurred_vision,
            back_pain: self.back_pain,
            headache: self.headache,
            dizziness: self.dizziness,
            swelling: self.swelling,
            nausea_level: self.nausea_level,
            fatigue_level: self.fatigue_level,
            blood_pressure_systolic: self.blood_pressure_systolic,
            blood_pressure_diastolic: self.blood_pressure_diastolic,
            temperature: self.temperature,
            fetal_movements_count: self.fetal_movements_count,
        }
    }
}

/// The fields of a check-in the risk rules and symptom counts look at.
///
/// Every vital is optional; a missing value never triggers a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckinObservation {
    pub vaginal_bleeding: bool,
    pub blurred_vision: bool,
    pub back_pain: bool,
    pub headache: bool,
    pub dizziness: bool,
    pub swelling: bool,
    pub nausea_level: Option<u8>,
    pub fatigue_level: Option<u8>,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub temperature: Option<f64>,
    pub fetal_movements_count: Option<i32>,
}

/// Request body for creating a check-in.
///
/// `pregnancy_id` and `week_number` are optional here so that their absence
/// surfaces as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewWeeklyCheckin {
    pub pregnancy_id: Option<i64>,
    pub week_number: Option<i32>,
    pub checkin_date: Option<jiff::civil::Date>,

    pub nausea_level: Option<u8>,
    pub fatigue_level: Option<u8>,
    #[serde(default)]
    pub back_pain: bool,
    #[serde(default)]
    pub headache: bool,
    #[serde(default)]
    pub dizziness: bool,
    #[serde(default)]
    pub swelling: bool,
    #[serde(default)]
    pub vaginal_bleeding: bool,
    #[serde(default)]
    pub blurred_vision: bool,

    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub weight: Option<f64>,
    pub temperature: Option<f64>,

    pub fetal_movements_count: Option<i32>,
    pub fetal_movement_notes: Option<String>,
    pub other_symptoms: Option<String>,
    pub general_notes: Option<String>,
}

impl NewWeeklyCheckin {
    /// Check required keys and scale bounds. Returns the natural key
    /// `(pregnancy_id, week_number)` on success.
    pub fn validate(&self) -> Result<(i64, i32), CoreError> {
        let pregnancy_id = self
            .pregnancy_id
            .ok_or(CoreError::MissingField("pregnancyId"))?;
        let week_number = self
            .week_number
            .ok_or(CoreError::MissingField("weekNumber"))?;

        require_positive("pregnancyId", pregnancy_id)?;
        require_positive("weekNumber", i64::from(week_number))?;
        check_scale("nauseaLevel", self.nausea_level)?;
        check_scale("fatigueLevel", self.fatigue_level)?;

        Ok((pregnancy_id, week_number))
    }

    pub fn observation(&self) -> CheckinObservation {
        CheckinObservation {
            vaginal_bleeding: self.vaginal_bleeding,
            blurred_vision: self.blurred_vision,
            back_pain: self.back_pain,
            headache: self.headache,
            dizziness: self.dizziness,
            swelling: self.swelling,
            nausea_level: self.nausea_level,
            fatigue_level: self.fatigue_level,
            blood_pressure_systolic: self.blood_pressure_systolic,
            blood_pressure_diastolic: self.blood_pressure_diastolic,
            temperature: self.temperature,
            fetal_movements_count: self.fetal_movements_count,
        }
    }
}

/// Partial update for a check-in.
///
/// Required columns are `Option<T>`: absent or `null` keeps the stored value.
/// Nullable columns are `Option<Option<T>>`: absent keeps the stored value,
/// `null` (`Some(None)`) clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckinPatch {
    pub week_number: Option<i32>,
    pub checkin_date: Option<jiff::civil::Date>,

    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub nausea_level: Option<Option<u8>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub fatigue_level: Option<Option<u8>>,
    pub back_pain: Option<bool>,
    pub headache: Option<bool>,
    pub dizziness: Option<bool>,
    pub swelling: Option<bool>,
    pub vaginal_bleeding: Option<bool>,
    pub blurred_vision: Option<bool>,

    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_pressure_systolic: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_pressure_diastolic: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<Option<f64>>,

    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetal_movements_count: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetal_movement_notes: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub other_symptoms: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub general_notes: Option<Option<String>>,
}

impl CheckinPatch {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(week) = self.week_number {
            require_positive("weekNumber", i64::from(week))?;
        }
        check_scale("nauseaLevel", self.nausea_level.flatten())?;
        check_scale("fatigueLevel", self.fatigue_level.flatten())?;
        Ok(())
    }

    /// The observation the assessor sees after this patch is laid over `current`.
    /// Patch fields win, a cleared field included; everything else comes from
    /// the stored record.
    pub fn merged_observation(&self, current: &WeeklyCheckin) -> CheckinObservation {
        let base = current.observation();
        CheckinObservation {
            vaginal_bleeding: self.vaginal_bleeding.unwrap_or(base.vaginal_bleeding),
            blurred_vision: self.blurred_vision.unwrap_or(base.blurred_vision),
            back_pain: self.back_pain.unwrap_or(base.back_pain),
            headache: self.headache.unwrap_or(base.headache),
            dizziness: self.dizziness.unwrap_or(base.dizziness),
            swelling: self.swelling.unwrap_or(base.swelling),
            nausea_level: self.nausea_level.unwrap_or(base.nausea_level),
            fatigue_level: self.fatigue_level.unwrap_or(base.fatigue_level),
            blood_pressure_systolic: self
                .blood_pressure_systolic
                .unwrap_or(base.blood_pressure_systolic),
            blood_pressure_diastolic: self
                .blood_pressure_diastolic
                .unwrap_or(base.blood_pressure_diastolic),
            temperature: self.temperature.unwrap_or(base.temperature),
            fetal_movements_count: self
                .fetal_movements_count
                .unwrap_or(base.fetal_movements_count),
        }
    }
}

/// A present key always yields `Some`, so an explicit `null` becomes
/// `Some(None)`. Absent keys fall back to `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn require_positive(field: &'static str, value: i64) -> Result<(), CoreError> {
    if value > 0 {
        Ok(())
    } else {
        Err(CoreError::NotPositive { field, value })
    }
}

fn check_scale(field: &'static str, value: Option<u8>) -> Result<(), CoreError> {
    match value {
        Some(v) if !(SCALE_MIN..=SCALE_MAX).contains(&v) => Err(CoreError::OutOfRange {
            field,
            value: i64::from(v),
            min: i64::from(SCALE_MIN),
            max: i64::from(SCALE_MAX),
        }),
        _ => Ok(()),
    }
}
