//! Challan API module

mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/challan", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create))
        .route("/update/{id}", put(handler::update))
        .route("/delete/{id}", delete(handler::delete))
        .route("/view/{id}", get(handler::view))
        .route("/all", get(handler::all))
        .route("/my-challans", get(handler::my_challans))
        .route("/public/search", get(handler::public_search))
        .route("/public/pay/{id}", post(handler::public_pay))
}
