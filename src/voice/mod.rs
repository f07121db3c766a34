pub mod codec;
mod dto;
pub mod handlers;
pub mod playback;
mod services;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/voice/live", get(handlers::live_session))
}
