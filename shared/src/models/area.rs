//! Area Model

use serde::{Deserialize, Serialize};

/// Area — a patrol jurisdiction officers are assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Area {
    pub id: i64,
    pub city: String,
    pub zone: String,
    pub sub_area: String,
}

/// Create area payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaCreate {
    pub city: String,
    pub zone: String,
    pub sub_area: String,
}
