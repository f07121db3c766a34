use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use super::dto::CreateLogRequest;
use super::services;
use super::store::DailyLogEntry;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<DailyLogEntry>> {
    Json(state.journal.all().await)
}

/// Appends exactly one entry. Empty submissions are rejected up front so
/// the gateway is never called for them.
#[instrument(skip(state, body))]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateLogRequest>,
) -> Result<(StatusCode, Json<DailyLogEntry>), (StatusCode, String)> {
    if body.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "log entry needs food, water or exercise".to_string(),
        ));
    }

    let feedback =
        services::feedback_on_activity(&state, &body.food, body.water, &body.exercise).await;
    let entry = state
        .journal
        .append(body.food, body.water, body.exercise, feedback)
        .await;
    info!(entry_id = %entry.id, "journal entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::{AppConfig, ModelConfig};
    use crate::gemini::{GeminiError, GenerativeClient, GroundedAnswer};

    /// Counts calls instead of talking to a gateway.
    struct CountingClient {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl GenerativeClient for CountingClient {
        async fn generate_text(&self, _m: &str, _p: &str) -> Result<String, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(GeminiError::EmptyResponse)
            } else {
                Ok("well balanced day".into())
            }
        }
        async fn generate_json(
            &self,
            _m: &str,
            _p: &str,
            _s: serde_json::Value,
        ) -> Result<String, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("[]".into())
        }
        async fn grounded_generate(
            &self,
            _m: &str,
            _q: &str,
        ) -> Result<GroundedAnswer, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(GroundedAnswer {
                text: String::new(),
                sources: vec![],
            })
        }
        async fn chat(&self, _m: &str, _si: &str, _msg: &str) -> Result<String, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(String::new())
        }
    }

    fn counting_state(fail: bool) -> (AppState, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = Arc::new(AppConfig {
            api_key: "test".into(),
            host: "127.0.0.1".into(),
            port: 0,
            models: ModelConfig::defaults(),
        });
        let client = CountingClient {
            calls: calls.clone(),
            fail,
        };
        (AppState::from_parts(config, Arc::new(client)), calls)
    }

    #[tokio::test]
    async fn empty_submission_is_rejected_without_gateway_call() {
        let (state, calls) = counting_state(false);
        let body = CreateLogRequest {
            food: String::new(),
            water: 0.0,
            exercise: "   ".into(),
        };

        let err = create_entry(State(state.clone()), Json(body))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.journal.len().await, 0);
    }

    #[tokio::test]
    async fn accepted_submission_appends_one_entry_with_feedback() {
        let (state, calls) = counting_state(false);
        let body = CreateLogRequest {
            food: "oatmeal".into(),
            water: 1.2,
            exercise: "jog".into(),
        };

        let (status, Json(entry)) = create_entry(State(state.clone()), Json(body))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry.ai_feedback, "well balanced day");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.journal.len().await, 1);
    }

    #[tokio::test]
    async fn gateway_failure_still_appends_with_fallback_feedback() {
        let (state, _calls) = counting_state(true);
        let body = CreateLogRequest {
            food: "pizza".into(),
            water: 0.0,
            exercise: String::new(),
        };

        let (_, Json(entry)) = create_entry(State(state.clone()), Json(body))
            .await
            .unwrap();
        assert_eq!(entry.ai_feedback, services::FEEDBACK_FALLBACK);
        assert_eq!(state.journal.len().await, 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (state, _) = counting_state(false);
        for food in ["a", "b", "c"] {
            let body = CreateLogRequest {
                food: food.into(),
                water: 0.0,
                exercise: String::new(),
            };
            create_entry(State(state.clone()), Json(body)).await.unwrap();
        }
        let Json(entries) = list_entries(State(state)).await;
        let foods: Vec<_> = entries.iter().map(|e| e.food.as_str()).collect();
        assert_eq!(foods, ["a", "b", "c"]);
    }
}
