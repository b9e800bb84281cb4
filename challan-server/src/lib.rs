//! E-challan backend server
//!
//! Traffic-violation ticketing for bikes: a rule catalog, challan
//! issuance and payment, citizen appeals with officer review, and
//! rank-gated administration.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
