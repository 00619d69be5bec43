use chrono::{DateTime, Utc};
use semantic_qa_common::{Result, SemanticQaError};
use semantic_qa_embedding::EmbeddingProvider;
use tracing::info;

use crate::similarity::best_match;

/// The fixed answer pool, embedded once at startup
pub const DEFAULT_ANSWERS: [&str; 4] = [
    "The capital of France is Paris.",
    "The tallest mountain in the world is Mount Everest.",
    "The square root of 64 is 8.",
    "Python is a popular programming language.",
];

/// In-memory index of answer strings and their cached embeddings
///
/// Built once at startup, read-only afterwards. Answers and embeddings are
/// index-aligned: `embeddings[i]` belongs to `answers[i]`.
pub struct AnswerIndex {
    answers: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    embedding_model: String,
    built_at: DateTime<Utc>,
}

impl AnswerIndex {
    /// Embed all answers and build the index
    pub async fn build(
        provider: &dyn EmbeddingProvider,
        model: &str,
        answers: &[&str],
    ) -> Result<Self> {
        if answers.is_empty() {
            return Err(SemanticQaError::EmptyCandidateSet);
        }

        info!("Embedding {} answers with model {}", answers.len(), model);
        let embeddings = provider.embed_batch(model, answers).await?;

        if embeddings.len() != answers.len() {
            return Err(SemanticQaError::internal(format!(
                "Provider returned {} embeddings for {} answers",
                embeddings.len(),
                answers.len()
            )));
        }

        info!(
            "Answer index built - {} entries, dimension {}",
            embeddings.len(),
            embeddings[0].len()
        );

        Ok(Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            embeddings,
            embedding_model: model.to_string(),
            built_at: Utc::now(),
        })
    }

    /// Find the answer most similar to the query embedding
    pub fn best_answer(&self, query_embedding: &[f32]) -> Result<&str> {
        let index = best_match(query_embedding, &self.embeddings)?;
        Ok(&self.answers[index])
    }

    /// Number of indexed answers
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Embedding dimension
    pub fn dimension(&self) -> usize {
        self.embeddings.first().map(|e| e.len()).unwrap_or(0)
    }

    /// Model used to build the index
    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    /// When the index finished building
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
