//! Client-facing request/response DTOs
//!
//! Shared between the server handlers and API consumers (frontend,
//! integration tests) so both sides agree on wire shapes.

use serde::{Deserialize, Serialize};

/// Plain confirmation body for operations with nothing else to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Access/refresh token pair returned by both login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login payload (user and officer endpoints share the shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful website-user login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoginResponse {
    pub message: String,
    pub user_id: i64,
    pub email: String,
    pub tokens: TokenPair,
}

/// Successful officer login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerLoginResponse {
    pub message: String,
    pub officer_id: i64,
    pub rank: String,
    pub name: String,
    pub tokens: TokenPair,
}

/// Citizen signup payload.
///
/// Signup registers the citizen, the account, the bike and the CNIC
/// document copies in one shot (document uploads happen out of band, only
/// URLs travel here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub cnic: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub bike_number: String,
    pub official_copy_url: String,
    pub cnic_front_url: String,
    pub cnic_back_url: String,
}
