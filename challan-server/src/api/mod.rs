//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`rules`] - violation rule catalog
//! - [`challans`] - challan issuance, lookup and payment
//! - [`appeals`] - appeal submission and review
//! - [`users`] - citizen accounts
//! - [`officers`] - officer accounts and areas

pub mod appeals;
pub mod challans;
pub mod health;
pub mod officers;
pub mod rules;
pub mod users;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::middleware::attach_actor;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(rules::router())
        .merge(challans::router())
        .merge(appeals::router())
        .merge(users::router())
        .merge(officers::router())
        .layer(middleware::from_fn_with_state(state.clone(), attach_actor))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
