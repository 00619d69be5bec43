use semantic_qa_common::AppConfig;
use semantic_qa_embedding::EmbeddingProvider;
use semantic_qa_vector::AnswerIndex;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// The index slot is written exactly once, by the startup task that flips the
/// process from Loading to Ready. Every request path only reads it.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Embedding backend
    pub provider: Arc<dyn EmbeddingProvider>,

    /// Answer index, None while the model is still loading
    index: RwLock<Option<Arc<AnswerIndex>>>,
}

impl AppState {
    /// Create new application state in the Loading phase
    pub fn new(config: AppConfig, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            config,
            provider,
            index: RwLock::new(None),
        }
    }

    /// Get the answer index, or None while still Loading
    pub async fn ready_index(&self) -> Option<Arc<AnswerIndex>> {
        self.index.read().await.clone()
    }

    /// Whether startup initialization has completed
    pub async fn is_ready(&self) -> bool {
        self.index.read().await.is_some()
    }

    /// Transition from Loading to Ready
    pub async fn mark_ready(&self, index: AnswerIndex) {
        *self.index.write().await = Some(Arc::new(index));
    }
}
