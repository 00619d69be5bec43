//! Embedding provider integration
//!
//! Ollama embeddings API client behind the [`EmbeddingProvider`] trait

mod client;
mod provider;
mod types;

pub use client::OllamaClient;
pub use provider::EmbeddingProvider;
pub use types::{EmbedRequest, EmbedResponse};
