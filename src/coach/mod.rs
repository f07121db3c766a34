mod dto;
pub mod handlers;
mod services;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/coach/chat", post(handlers::chat))
}
