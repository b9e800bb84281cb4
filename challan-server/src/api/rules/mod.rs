//! Rule catalog API module

mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/challan/rules", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/add", post(handler::create))
        .route("/update/{id}", put(handler::update))
        .route("/delete/{id}", delete(handler::delete))
        .route("/view/{id}", get(handler::get_by_id))
        .route("/all", get(handler::list))
}
