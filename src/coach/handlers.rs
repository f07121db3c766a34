use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use super::dto::{ChatRequest, ChatResponse};
use super::services;
use crate::state::AppState;

/// One message in, one reply out. A dead gateway yields the fixed
/// fallback reply rather than an error status.
#[instrument(skip(state, body))]
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if body.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message is required".to_string()));
    }

    let reply = services::chat_reply(&state, body.message.trim()).await;
    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let state = AppState::fake();
        let err = chat(
            State(state),
            Json(ChatRequest {
                message: "   ".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_empty_message_gets_a_reply() {
        let state = AppState::fake();
        let Json(resp) = chat(
            State(state),
            Json(ChatRequest {
                message: "am I drinking enough water?".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.reply, "stub reply");
    }
}
