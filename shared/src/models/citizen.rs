//! Citizen Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Citizen — real-world identity, keyed by CNIC.
///
/// The CNIC is globally unique and immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Citizen {
    pub cnic: String,
    pub full_name: String,
    pub dob: Option<NaiveDate>,
    pub address: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: i64,
}

/// Create citizen payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenCreate {
    pub cnic: String,
    pub full_name: String,
    pub dob: Option<NaiveDate>,
    pub address: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
