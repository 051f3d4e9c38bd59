//! Weekly check-in risk assessment.
//!
//! A fixed set of rules, each evaluated independently against a
//! [`CheckinObservation`]. Severity depends only on which rules fired:
//! bleeding or blurred vision make it high, any other rule makes it medium.
//! The number of rules that fired never escalates the level.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::checkin::CheckinObservation;

pub const SYSTOLIC_HIGH: i32 = 140;
pub const DIASTOLIC_HIGH: i32 = 90;
/// Fewer movements than this over the monitoring window counts as reduced.
pub const FETAL_MOVEMENTS_MIN: i32 = 10;
/// Degrees Celsius; strictly above is a fever.
pub const FEVER_ABOVE: f64 = 37.5;

pub const LOW_RISK_RECOMMENDATION: &str = "Continue regular checkups and healthy lifestyle";

/// Ordered by severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule of the assessor. [`RiskRule::ALL`] is in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    Bleeding,
    VisualDisturbance,
    Hypertension,
    ReducedFetalMovement,
    Fever,
}

impl RiskRule {
    pub const ALL: [RiskRule; 5] = [
        RiskRule::Bleeding,
        RiskRule::VisualDisturbance,
        RiskRule::Hypertension,
        RiskRule::ReducedFetalMovement,
        RiskRule::Fever,
    ];

    pub fn triggered(&self, obs: &CheckinObservation) -> bool {
        match self {
            RiskRule::Bleeding => obs.vaginal_bleeding,
            RiskRule::VisualDisturbance => obs.blurred_vision,
            RiskRule::Hypertension => {
                obs.blood_pressure_systolic.is_some_and(|s| s >= SYSTOLIC_HIGH)
                    || obs.blood_pressure_diastolic.is_some_and(|d| d >= DIASTOLIC_HIGH)
            }
            RiskRule::ReducedFetalMovement => obs
                .fetal_movements_count
                .is_some_and(|c| c < FETAL_MOVEMENTS_MIN),
            RiskRule::Fever => obs.temperature.is_some_and(|t| t > FEVER_ABOVE),
        }
    }

    /// Emergency signs. Any one of these alone makes the check-in high risk.
    pub fn is_emergency(&self) -> bool {
        matches!(self, RiskRule::Bleeding | RiskRule::VisualDisturbance)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            RiskRule::Bleeding => "Vaginal bleeding detected",
            RiskRule::VisualDisturbance => "Blurred vision (possible preeclampsia)",
            RiskRule::Hypertension => "High blood pressure",
            RiskRule::ReducedFetalMovement => "Reduced fetal movements",
            RiskRule::Fever => "Elevated temperature",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskRule::Bleeding => "Seek immediate medical attention",
            RiskRule::VisualDisturbance => "Check blood pressure immediately",
            RiskRule::Hypertension => "Monitor BP regularly, reduce salt intake",
            RiskRule::ReducedFetalMovement => {
                "Drink cold water, lie on left side, monitor for 2 hours"
            }
            RiskRule::Fever => "Rest, hydrate, monitor for other symptoms",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// The persisted boolean form of the level.
    pub fn risk_flag(&self) -> bool {
        self.level == RiskLevel::High
    }

    /// The persisted text form of the reasons.
    pub fn risk_reason(&self) -> String {
        self.reasons.join(", ")
    }
}

/// Classify an observation. Never fails; absent vitals simply do not trigger.
pub fn assess(obs: &CheckinObservation) -> RiskAssessment {
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();
    let mut emergency = false;

    for rule in RiskRule::ALL {
        if rule.triggered(obs) {
            emergency |= rule.is_emergency();
            reasons.push(rule.reason().to_string());
            recommendations.push(rule.recommendation().to_string());
        }
    }

    let level = if emergency {
        RiskLevel::High
    } else if !reasons.is_empty() {
        RiskLevel::Medium
    } else {
        recommendations.push(LOW_RISK_RECOMMENDATION.to_string());
        RiskLevel::Low
    };

    RiskAssessment {
        level,
        reasons,
        recommendations,
    }
}
