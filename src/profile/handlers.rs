use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::UserProfile;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile.read().await.clone())
}

#[instrument(skip(state, body))]
pub async fn put_profile(
    State(state): State<AppState>,
    Json(body): Json<UserProfile>,
) -> Json<UserProfile> {
    let mut profile = state.profile.write().await;
    *profile = body;
    info!(specialization = %profile.specialization, "profile updated");
    Json(profile.clone())
}
