use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::checkin::WeeklyCheckin;
use crate::risk::{self, RiskLevel};
use crate::symptoms::{count_symptoms, has_warning_signs};

/// One row of a pregnancy's weekly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeeklySummaryEntry {
    pub week_number: i32,
    pub checkin_date: jiff::civil::Date,
    pub symptoms_count: u8,
    pub has_warning_signs: bool,
    /// As persisted at create/update time.
    pub risk_flag: bool,
    /// Recomputed from the stored observation, not read from storage.
    pub risk_level: RiskLevel,
}

impl WeeklySummaryEntry {
    /// Whether the stored flag agrees with the recomputed level.
    pub fn is_consistent(&self) -> bool {
        self.risk_flag == (self.risk_level == RiskLevel::High)
    }
}

pub fn summarize_checkin(checkin: &WeeklyCheckin) -> WeeklySummaryEntry {
    let obs = checkin.observation();
    WeeklySummaryEntry {
        week_number: checkin.week_number,
        checkin_date: checkin.checkin_date,
        symptoms_count: count_symptoms(&obs),
        has_warning_signs: has_warning_signs(&obs),
        risk_flag: checkin.risk_flag,
        risk_level: risk::assess(&obs).level,
    }
}

/// Summarize check-ins in the order given. Callers pass them newest week first.
pub fn summarize(checkins: &[WeeklyCheckin]) -> Vec<WeeklySummaryEntry> {
    checkins.iter().map(summarize_checkin).collect()
}
