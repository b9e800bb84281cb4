//! Bike, BikeDocument and UserBike Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stolen flag on a bike record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum StolenStatus {
    Stolen,
    NotStolen,
}

/// Bike — a registered vehicle, plate unique system-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bike {
    pub id: i64,
    pub bike_number: String,
    pub owner_cnic: String,
    pub registration_date: NaiveDate,
    pub stolen_status: StolenStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Attached proof image kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum DocumentType {
    FrontCopy,
    BackCopy,
    RegistrationCard,
    Other,
}

/// BikeDocument — an uploaded proof image for a bike.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BikeDocument {
    pub id: i64,
    pub bike_id: i64,
    pub document_type: DocumentType,
    pub image_url: String,
    pub uploaded_at: i64,
}

/// Ownership-link verification state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// UserBike — links an account to a bike it claims to own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserBike {
    pub id: i64,
    pub user_id: i64,
    pub bike_id: i64,
    pub verification_status: VerificationStatus,
    pub official_copy_url: Option<String>,
    pub is_primary: bool,
    pub submitted_at: i64,
    pub verified_at: Option<i64>,
}
