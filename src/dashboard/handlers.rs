use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use super::metrics::HealthMetric;
use super::services;
use crate::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub metrics: Vec<HealthMetric>,
    pub profile: UserProfile,
    pub quick_tip: String,
}

/// Dashboard snapshot: metric seed, current profile and a fresh tip.
/// Never fails; a dead gateway only degrades the tip.
#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let quick_tip = services::quick_tip(&state).await;
    let profile = state.profile.read().await.clone();
    Json(DashboardResponse {
        metrics: state.metrics.as_ref().clone(),
        profile,
        quick_tip,
    })
}
