use std::net::SocketAddr;

mod app;
mod coach;
mod config;
mod dashboard;
mod diet;
mod gemini;
mod journal;
mod profile;
mod search;
mod state;
mod voice;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "healthmonet=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init()?;
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;

    let router = app::build_app(state);
    app::serve(router, addr).await
}
