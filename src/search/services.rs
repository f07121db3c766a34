use tracing::error;

use super::dto::SearchResponse;
use crate::state::AppState;

/// Search-grounded answer for a free-text health query. A failed call
/// degrades to an empty answer with no sources.
pub async fn search_topic(st: &AppState, query: &str) -> SearchResponse {
    match st
        .gemini
        .grounded_generate(&st.config.models.search, query)
        .await
    {
        Ok(answer) => SearchResponse {
            text: answer.text,
            sources: answer.sources,
        },
        Err(e) => {
            error!(error = %e, "grounded search failed");
            SearchResponse {
                text: String::new(),
                sources: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answer_passes_through_from_gateway() {
        let state = crate::state::AppState::fake();
        let resp = search_topic(&state, "is intermittent fasting effective?").await;
        assert_eq!(resp.text, "stub answer");
        assert!(resp.sources.is_empty());
    }

    #[tokio::test]
    async fn failed_search_degrades_to_empty_answer() {
        let state = crate::state::AppState::failing();
        let resp = search_topic(&state, "anything").await;
        assert!(resp.text.is_empty());
        assert!(resp.sources.is_empty());
    }
}
