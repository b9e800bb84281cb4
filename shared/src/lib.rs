//! Shared types for the e-challan backend.
//!
//! Domain models and client-facing DTOs live here so the server and any
//! future in-process client/test harness agree on wire shapes.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod client;
pub mod models;
pub mod util;
