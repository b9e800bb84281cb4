//! Data models
//!
//! Shared between challan-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are snowflake `i64` (SQLite INTEGER PRIMARY KEY), timestamps
//! are Unix millis, calendar dates are `chrono::NaiveDate`.

pub mod area;
pub mod bike;
pub mod challan;
pub mod challenge;
pub mod citizen;
pub mod officer;
pub mod rule;
pub mod website_user;

// Re-exports
pub use area::*;
pub use bike::*;
pub use challan::*;
pub use challenge::*;
pub use citizen::*;
pub use officer::*;
pub use rule::*;
pub use website_user::*;
