use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use super::dto::{SearchRequest, SearchResponse};
use super::services;
use crate::state::AppState;

#[instrument(skip(state, body))]
pub async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    if body.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "query is required".to_string()));
    }

    Ok(Json(services::search_topic(&state, body.query.trim()).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_query_is_rejected() {
        let state = AppState::fake();
        let err = search(
            State(state),
            Json(SearchRequest { query: "".into() }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
