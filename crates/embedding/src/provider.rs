use async_trait::async_trait;
use semantic_qa_common::Result;

/// Common trait for embedding backends
///
/// Any model that maps text to fixed-length vectors can sit behind this
/// trait; callers never depend on a concrete backend.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one vector per input,
    /// preserving input order
    async fn embed_batch(&self, model: &str, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}
