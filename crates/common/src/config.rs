use crate::error::SemanticQaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Semantic QA application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Embedding backend base URL (Ollama-compatible API)
    pub embedding_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Single allowed CORS origin
    pub cors_origin: String,

    /// Maximum time to wait for model load + answer embedding at startup
    pub model_load_timeout_secs: u64,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            embedding_base_url: "http://localhost:11434".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            cors_origin: "http://localhost:3001".to_string(),
            model_load_timeout_secs: 120,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SemanticQaError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            embedding_base_url: std::env::var("EMBEDDING_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "nomic-embed-text".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            model_load_timeout_secs: std::env::var("MODEL_LOAD_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), SemanticQaError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                SemanticQaError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Model load timeout as a Duration
    pub fn model_load_timeout(&self) -> Duration {
        Duration::from_secs(self.model_load_timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SemanticQaError> {
        if self.embedding_model.is_empty() {
            return Err(SemanticQaError::config("Embedding model name cannot be empty"));
        }

        if !self.embedding_base_url.starts_with("http://")
            && !self.embedding_base_url.starts_with("https://") {
            return Err(SemanticQaError::config(
                "Embedding base URL must start with http:// or https://"
            ));
        }

        if !self.cors_origin.starts_with("http://")
            && !self.cors_origin.starts_with("https://") {
            return Err(SemanticQaError::config(
                "CORS origin must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(SemanticQaError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
