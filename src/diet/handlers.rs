use axum::{extract::State, Json};
use tracing::instrument;

use super::dto::DietPlan;
use super::services;
use crate::state::AppState;

/// Generates a fresh weekly plan from the current profile. Failures and
/// unparseable model output both surface as an empty array.
#[instrument(skip(state))]
pub async fn generate_plan(State(state): State<AppState>) -> Json<Vec<DietPlan>> {
    Json(services::weekly_plan(&state).await)
}
