//! Semantic QA HTTP server
//!
//! Actix-web surface for the embed and answer endpoints

mod error;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod types;

pub use state::AppState;

use actix_cors::Cors;
use actix_web::{http, web, App, HttpResponse, HttpServer};
use semantic_qa_common::{AppConfig, Result, SemanticQaError};
use semantic_qa_embedding::{EmbeddingProvider, OllamaClient};
use semantic_qa_vector::{AnswerIndex, DEFAULT_ANSWERS};
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

/// Start the HTTP server
///
/// The answer index is built by a background task; until it completes the
/// process is in the Loading phase and request handlers reject with 400.
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let provider: Arc<dyn EmbeddingProvider> =
        Arc::new(OllamaClient::new(&config.embedding_base_url)?);
    let state = Arc::new(AppState::new(config.clone(), provider));

    spawn_index_build(state.clone());

    let bind_addr = config.server_bind_address();
    let cors_origin = config.cors_origin.clone();
    info!("Server listening on http://{}", bind_addr);

    let app_state = web::Data::new(state);
    HttpServer::new(move || {
        // Single fixed origin, nothing else
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .app_data(json_config())
            .service(routes::embed::embed_text)
            .service(routes::answer::answer)
            .service(routes::health::health)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

/// Build the answer index in the background and flip the state to Ready
fn spawn_index_build(state: Arc<AppState>) {
    tokio::spawn(async move {
        let timeout = state.config.model_load_timeout();
        match tokio::time::timeout(timeout, build_index(&state)).await {
            Ok(Ok(index)) => {
                state.mark_ready(index).await;
                info!("Model and answer embeddings loaded");
            }
            Ok(Err(e)) => {
                // Keep serving; handlers reject until someone restarts us
                error!("Failed to build answer index: {}", e);
            }
            Err(_) => {
                error!("Answer index build timed out after {:?}", timeout);
            }
        }
    });
}

async fn build_index(state: &AppState) -> Result<AnswerIndex> {
    // Surface an unreachable backend early instead of timing out per answer
    if !state.provider.test_connection().await? {
        return Err(SemanticQaError::network(format!(
            "Embedding backend at {} is not responding",
            state.config.embedding_base_url
        )));
    }

    AnswerIndex::build(
        state.provider.as_ref(),
        &state.config.embedding_model,
        &DEFAULT_ANSWERS,
    )
    .await
}

/// Malformed bodies and missing fields map to the same empty-body 400 as
/// blank input
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().finish())
            .into()
    })
}
