use crate::journal::store::DailyLogEntry;
use crate::profile::UserProfile;

pub const VOICE_NAME: &str = "Puck";

/// How many journal entries the voice coach gets to see.
pub const RECENT_LOG_WINDOW: usize = 3;

pub fn live_system_instruction(profile: &UserProfile, recent: &[DailyLogEntry]) -> String {
    let history = if recent.is_empty() {
        "No logs yet".to_string()
    } else {
        recent
            .iter()
            .map(|l| {
                format!(
                    "User ate {}, drank {}L water, and did {}.",
                    l.food, l.water, l.exercise
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "You are an energetic and empathetic health coach for Health Monetisation. \
         The user is {} years old and identifies as {}. \
         Their main health focus is {}. \
         Recent activity history: {}. \
         Talk to them naturally about their day, provide motivation, and answer \
         health questions briefly. Be encouraging!",
        profile.age, profile.gender, profile.specialization, history
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_without_logs_mentions_it() {
        let text = live_system_instruction(&UserProfile::default(), &[]);
        assert!(text.contains("Recent activity history: No logs yet."));
        assert!(text.contains("28 years old"));
        assert!(text.contains("Muscle Gain"));
    }

    #[tokio::test]
    async fn instruction_includes_recent_entries() {
        let state = crate::state::AppState::fake();
        state
            .journal
            .append("pasta".into(), 1.5, "cycling".into(), String::new())
            .await;
        let recent = state.journal.recent(RECENT_LOG_WINDOW).await;
        let text = live_system_instruction(&UserProfile::default(), &recent);
        assert!(text.contains("User ate pasta, drank 1.5L water, and did cycling."));
    }
}
