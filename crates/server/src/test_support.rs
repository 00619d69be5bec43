//! Shared fixtures for handler tests

use async_trait::async_trait;
use semantic_qa_common::{AppConfig, Result};
use semantic_qa_embedding::EmbeddingProvider;
use semantic_qa_vector::{AnswerIndex, DEFAULT_ANSWERS};
use std::collections::HashMap;
use std::sync::Arc;

use crate::state::AppState;

/// Provider returning canned vectors keyed by input text
///
/// Unknown inputs get a fixed fallback vector so /embed stays usable
pub struct CannedProvider {
    vectors: HashMap<String, Vec<f32>>,
}

impl CannedProvider {
    pub fn new() -> Self {
        let mut vectors = HashMap::new();
        vectors.insert(DEFAULT_ANSWERS[0].to_string(), vec![1.0, 0.0, 0.0, 0.0]);
        vectors.insert(DEFAULT_ANSWERS[1].to_string(), vec![0.0, 1.0, 0.0, 0.0]);
        vectors.insert(DEFAULT_ANSWERS[2].to_string(), vec![0.0, 0.0, 1.0, 0.0]);
        vectors.insert(DEFAULT_ANSWERS[3].to_string(), vec![0.0, 0.0, 0.0, 1.0]);
        vectors.insert(
            "What is the capital of France?".to_string(),
            vec![0.9, 0.1, 0.05, 0.05],
        );
        Self { vectors }
    }
}

#[async_trait]
impl EmbeddingProvider for CannedProvider {
    async fn embed(&self, _model: &str, text: &str) -> Result<Vec<f32>> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.25, 0.25, 0.25, 0.25]))
    }

    async fn embed_batch(&self, model: &str, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(model, text).await?);
        }
        Ok(out)
    }

    async fn test_connection(&self) -> Result<bool> {
        Ok(true)
    }
}

/// State still in the Loading phase
pub fn loading_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        AppConfig::default(),
        Arc::new(CannedProvider::new()),
    ))
}

/// State with the answer index already built
pub async fn ready_state() -> Arc<AppState> {
    let state = loading_state();
    let index = AnswerIndex::build(
        state.provider.as_ref(),
        &state.config.embedding_model,
        &DEFAULT_ANSWERS,
    )
    .await
    .unwrap();
    state.mark_ready(index).await;
    state
}
