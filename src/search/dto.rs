use serde::{Deserialize, Serialize};

use crate::gemini::GroundingSource;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}
