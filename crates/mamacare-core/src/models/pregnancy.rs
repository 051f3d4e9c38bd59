use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pregnancy {
    pub id: i64,
    pub mother_id: i64,
    /// Last menstrual period.
    pub lmp_date: jiff::civil::Date,
    /// Estimated due date.
    pub edd_date: jiff::civil::Date,
    pub current_trimester: Option<u8>,
    pub pregnancy_number: Option<i32>,
    pub is_active: bool,
    pub outcome: PregnancyOutcome,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPregnancy {
    pub mother_id: i64,
    pub lmp_date: jiff::civil::Date,
    pub edd_date: jiff::civil::Date,
    pub current_trimester: Option<u8>,
    pub pregnancy_number: Option<i32>,
    pub notes: Option<String>,
}

impl NewPregnancy {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(t) = self.current_trimester
            && !(1..=3).contains(&t)
        {
            return Err(CoreError::OutOfRange {
                field: "currentTrimester",
                value: i64::from(t),
                min: 1,
                max: 3,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PregnancyOutcome {
    #[default]
    Ongoing,
    Delivered,
    Miscarriage,
    Terminated,
}

impl PregnancyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PregnancyOutcome::Ongoing => "ongoing",
            PregnancyOutcome::Delivered => "delivered",
            PregnancyOutcome::Miscarriage => "miscarriage",
            PregnancyOutcome::Terminated => "terminated",
        }
    }
}

impl fmt::Display for PregnancyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PregnancyOutcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(PregnancyOutcome::Ongoing),
            "delivered" => Ok(PregnancyOutcome::Delivered),
            "miscarriage" => Ok(PregnancyOutcome::Miscarriage),
            "terminated" => Ok(PregnancyOutcome::Terminated),
            other => Err(CoreError::InvalidEnum {
                field: "outcome",
                value: other.to_string(),
            }),
        }
    }
}
