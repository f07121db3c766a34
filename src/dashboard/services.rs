use tracing::error;

use crate::profile::UserProfile;
use crate::state::AppState;

pub const QUICK_TIP_FALLBACK: &str = "Stay hydrated and keep moving!";

pub fn quick_tip_prompt(profile: &UserProfile) -> String {
    format!(
        "Based on a {}-year-old {} with a {} profile and {} activity, \
         give one short, actionable health tip (max 30 words).",
        profile.age, profile.gender, profile.specialization, profile.activity_level
    )
}

/// Best-effort tip; a gateway failure degrades to the fixed fallback.
pub async fn quick_tip(st: &AppState) -> String {
    let profile = st.profile.read().await.clone();
    let prompt = quick_tip_prompt(&profile);
    match st
        .gemini
        .generate_text(&st.config.models.quick_tip, &prompt)
        .await
    {
        Ok(tip) => tip,
        Err(e) => {
            error!(error = %e, "quick tip generation failed");
            QUICK_TIP_FALLBACK.to_string()
        }
    }
}
