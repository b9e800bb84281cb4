//! Website User Model

use serde::{Deserialize, Serialize};

/// WebsiteUser — a citizen's account, 1:1 with a Citizen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WebsiteUser {
    pub id: i64,
    pub citizen_cnic: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_pic_url: Option<String>,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Public view of a website user (never carries the password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteUserInfo {
    pub id: i64,
    pub citizen_cnic: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_pic_url: Option<String>,
}

impl From<WebsiteUser> for WebsiteUserInfo {
    fn from(u: WebsiteUser) -> Self {
        Self {
            id: u.id,
            citizen_cnic: u.citizen_cnic,
            email: u.email,
            phone: u.phone,
            address: u.address,
            profile_pic_url: u.profile_pic_url,
        }
    }
}

/// Self-service profile update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteUserUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_pic_url: Option<String>,
}
