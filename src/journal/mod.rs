mod dto;
pub mod handlers;
mod services;
pub mod store;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/journal",
        get(handlers::list_entries).post(handlers::create_entry),
    )
}
