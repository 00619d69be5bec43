use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embed request
#[derive(Debug, Deserialize)]
pub struct EmbedTextRequest {
    /// Text to embed
    pub text: String,
}

/// Embed response
#[derive(Debug, Serialize)]
pub struct EmbedTextResponse {
    /// Embedding vector for the input text
    pub embeddings: Vec<f32>,
}

/// Answer request
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Question to match against the answer pool
    pub question: String,
}

/// Answer response
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    /// Most similar pre-computed answer
    pub answer: String,
}

/// Health/readiness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "loading" or "ready"
    pub status: String,

    /// Configured embedding model
    pub embedding_model: String,

    /// Number of indexed answers (0 while loading)
    pub answer_count: usize,

    /// When the answer index finished building
    pub ready_since: Option<DateTime<Utc>>,
}
