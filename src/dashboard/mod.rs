pub mod handlers;
pub mod metrics;
mod services;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::get_dashboard))
}
