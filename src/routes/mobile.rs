//! Mobiles resource routes.

use crate::handlers::mobile::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn mobile_routes(state: AppState) -> Router {
    Router::new()
        .route("/mobiles", get(list).post(create))
        .route(
            "/mobiles/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
