//! Challan Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder stored when a challan is issued without evidence.
pub const EVIDENCE_URL_SENTINEL: &str = "N/A";

/// Challan lifecycle states.
///
/// Unpaid (initial) -> Paid (terminal) | UnderAppeal -> resolved;
/// Cancelled is a terminal administrative state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum ChallanStatus {
    Unpaid,
    Paid,
    Cancelled,
    UnderAppeal,
}

/// Challan — a single issued violation ticket.
///
/// `amount_charged` is a value snapshot of the rule's fine at issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challan {
    pub id: i64,
    pub bike_id: i64,
    pub rule_id: i64,
    pub officer_id: Option<i64>,
    pub area_id: Option<i64>,
    pub challan_date: i64,
    pub status: ChallanStatus,
    pub due_date: NaiveDate,
    pub payment_date: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_charged: Decimal,
    pub evidence_url: Option<String>,
    pub payment_proof: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Issue challan payload — bike is referenced by plate, matched
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallanIssue {
    pub bike_number: String,
    pub rule_id: i64,
    pub evidence_url: Option<String>,
}

/// Administrative update payload (escape hatch, bypasses the state machine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallanUpdate {
    pub status: Option<ChallanStatus>,
    pub due_date: Option<NaiveDate>,
    pub evidence_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Public payment payload — bearer semantics, no ownership check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRequest {
    pub payment_proof: String,
}
