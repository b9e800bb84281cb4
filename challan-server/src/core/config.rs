//! Server configuration
//!
//! Everything comes from the environment (a .env file is honoured in
//! development). Rank allow-lists are configuration rather than code so
//! deployments can reshape the hierarchy without a release.

use serde::{Deserialize, Serialize};

use crate::auth::jwt::JwtConfig;
use shared::models::CATALOG_RANKS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP listen port
    pub http_port: u16,
    /// "development" | "production"
    pub environment: String,
    /// JWT settings
    pub jwt: JwtConfig,
    /// Ranks allowed to manage the rule catalog and challans
    pub manage_ranks: Vec<String>,
    /// Ranks allowed to administer officer accounts
    pub high_ranks: Vec<String>,
    /// Days from issuance to the payment due date
    pub challan_due_days: i64,
    /// HTTP mail relay endpoint; notices are logged when unset
    pub mail_relay_url: Option<String>,
    /// Sender address for outgoing notices
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "challan.db".to_string()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            jwt: JwtConfig::default(),
            manage_ranks: rank_list("MANAGE_RANKS", &CATALOG_RANKS),
            high_ranks: rank_list("HIGH_RANKS", &["Inspector", "SI"]),
            challan_due_days: std::env::var("CHALLAN_DUE_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(14),
            mail_relay_url: std::env::var("MAIL_RELAY_URL").ok(),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "no-reply@challan.gov.pk".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Read a comma-separated rank list from the environment.
fn rank_list(var: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(var) {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}
