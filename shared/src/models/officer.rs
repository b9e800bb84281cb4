//! Officer Model

use serde::{Deserialize, Serialize};

use super::Area;

/// Known rank spellings for the officer catalog.
///
/// Ranks are stored as free strings; authorization allow-lists are
/// configuration, not hard-coded per spelling.
pub const CATALOG_RANKS: [&str; 5] = ["Constable", "Head Constable", "ASI", "SI", "Inspector"];

/// Duty status of an officer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum DutyStatus {
    Active,
    Leave,
    Inactive,
}

/// Officer — credentialed staff bound to an Area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Officer {
    pub id: i64,
    pub rank: String,
    pub name: String,
    pub profile_pic_url: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub area_id: Option<i64>,
    pub status: DutyStatus,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Officer detail view with the assigned area expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerDetail {
    pub id: i64,
    pub rank: String,
    pub name: String,
    pub profile_pic_url: Option<String>,
    pub email: String,
    pub area_id: Option<i64>,
    pub area_details: Option<Area>,
    pub status: DutyStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create officer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerCreate {
    pub rank: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub area_id: Option<i64>,
    pub profile_pic_url: Option<String>,
    pub status: Option<DutyStatus>,
}

/// Update officer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerUpdate {
    pub rank: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub area_id: Option<i64>,
    pub profile_pic_url: Option<String>,
    pub status: Option<DutyStatus>,
}
