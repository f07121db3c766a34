use tracing::error;

use crate::profile::UserProfile;
use crate::state::AppState;

pub const FEEDBACK_FALLBACK: &str = "Keep up the good work!";

pub fn feedback_prompt(profile: &UserProfile, food: &str, water: f32, exercise: &str) -> String {
    format!(
        "As a health coach for a {}-year-old with specialization in {}, \
         provide specific feedback on today's activities:\n\
         - Food eaten: {}\n\
         - Water intake: {} Liters\n\
         - Exercise: {}\n\n\
         Keep the feedback concise, encouraging, and science-backed. \
         Focus on how this aligns with their {} goal.",
        profile.age, profile.specialization, food, water, exercise, profile.specialization
    )
}

/// Coaching feedback for one day's activities, falling back to the fixed
/// encouragement line when the gateway call fails.
pub async fn feedback_on_activity(
    st: &AppState,
    food: &str,
    water: f32,
    exercise: &str,
) -> String {
    let profile = st.profile.read().await.clone();
    let prompt = feedback_prompt(&profile, food, water, exercise);
    match st
        .gemini
        .generate_text(&st.config.models.feedback, &prompt)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "activity feedback generation failed");
            FEEDBACK_FALLBACK.to_string()
        }
    }
}
