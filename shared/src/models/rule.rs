//! Rule (Violation) Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rule — a catalog entry defining a violation type and its fine.
///
/// `fine_amount` is exact decimal money with 2 fraction digits. Editing a
/// rule's fine never changes already-issued challans (they carry a
/// snapshot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: i64,
    pub rule_name: String,
    pub description: String,
    pub exemption: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub fine_amount: Decimal,
    pub start_date: NaiveDate,
    pub other_penalties: Option<String>,
    pub created_at: i64,
}

/// Create rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCreate {
    pub rule_name: String,
    pub description: String,
    pub exemption: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub fine_amount: Decimal,
    pub start_date: NaiveDate,
    pub other_penalties: Option<String>,
}

/// Update rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleUpdate {
    pub rule_name: Option<String>,
    pub description: Option<String>,
    pub exemption: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fine_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub other_penalties: Option<String>,
}
