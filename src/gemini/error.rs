use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("live session transport error: {0}")]
    Live(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("model returned no usable content")]
    EmptyResponse,

    #[error("malformed gateway response: {0}")]
    Malformed(#[from] serde_json::Error),
}
