use tracing::error;

use crate::journal::store::DailyLogEntry;
use crate::profile::UserProfile;
use crate::state::AppState;

pub const CHAT_FALLBACK: &str =
    "I'm having trouble connecting to my knowledge base. Please try again in a moment.";

pub fn system_instruction(profile: &UserProfile) -> String {
    format!(
        "You are a professional health coach for Health Monetisation. \
         The user is {} years old and interested in {}. \
         Provide empathetic, science-backed health advice.",
        profile.age, profile.specialization
    )
}

/// Wraps the user's question with profile and recent-log context, the way
/// the coach sees it.
pub fn context_prompt(profile: &UserProfile, recent: &[DailyLogEntry], message: &str) -> String {
    let history = if recent.is_empty() {
        "No recent logs".to_string()
    } else {
        recent
            .iter()
            .map(|l| format!("Food: {}, Water: {}L, Exercise: {}", l.food, l.water, l.exercise))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    format!(
        "User Profile: Age {}, Gender {}, Goal {}.\n\
         Recent Activity Logs: {}.\n\
         User Question: {}",
        profile.age, profile.gender, profile.specialization, history, message
    )
}

pub async fn chat_reply(st: &AppState, message: &str) -> String {
    let profile = st.profile.read().await.clone();
    let recent = st.journal.recent(3).await;
    let instruction = system_instruction(&profile);
    let prompt = context_prompt(&profile, &recent, message);

    match st
        .gemini
        .chat(&st.config.models.chat, &instruction, &prompt)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, "coach chat failed");
            CHAT_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_mentions_age_and_goal() {
        let instruction = system_instruction(&UserProfile::default());
        assert!(instruction.contains("28 years old"));
        assert!(instruction.contains("Muscle Gain"));
    }

    #[tokio::test]
    async fn context_prompt_without_logs_says_so() {
        let prompt = context_prompt(&UserProfile::default(), &[], "how much protein?");
        assert!(prompt.contains("Recent Activity Logs: No recent logs."));
        assert!(prompt.contains("User Question: how much protein?"));
    }

    #[tokio::test]
    async fn context_prompt_joins_recent_logs() {
        let state = crate::state::AppState::fake();
        state
            .journal
            .append("rice".into(), 1.0, "spin class".into(), String::new())
            .await;
        state
            .journal
            .append("fish".into(), 2.0, "rest".into(), String::new())
            .await;

        let recent = state.journal.recent(3).await;
        let prompt = context_prompt(&UserProfile::default(), &recent, "dinner ideas?");
        assert!(prompt.contains("Food: rice, Water: 1L, Exercise: spin class"));
        assert!(prompt.contains(" | Food: fish"));
    }

    #[tokio::test]
    async fn reply_comes_from_gateway_when_it_answers() {
        let state = crate::state::AppState::fake();
        assert_eq!(chat_reply(&state, "hello").await, "stub reply");
    }

    #[tokio::test]
    async fn gateway_failure_yields_fixed_fallback_reply() {
        let state = crate::state::AppState::failing();
        assert_eq!(chat_reply(&state, "hello").await, CHAT_FALLBACK);
    }
}
