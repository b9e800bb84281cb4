//! Appeal API module

mod handler;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/challan/appeal", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create))
        .route("/update/{id}", patch(handler::update))
        .route("/view/{id}", get(handler::view))
        .route("/all", get(handler::all))
        .route("/review/{id}", post(handler::review))
}
