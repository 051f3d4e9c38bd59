use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Mother {
    pub id: i64,
    pub user_id: i64,
    pub blood_group: Option<String>,
    pub rh_factor: Option<String>,
    pub known_allergies: Option<String>,
    pub previous_pregnancies: i32,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewMother {
    pub user_id: i64,
    pub blood_group: Option<String>,
    pub rh_factor: Option<String>,
    pub known_allergies: Option<String>,
    #[serde(default)]
    pub previous_pregnancies: i32,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}
