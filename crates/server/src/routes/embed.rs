use actix_web::{post, web, HttpResponse};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{EmbedTextRequest, EmbedTextResponse};

/// Embed arbitrary text with the loaded model
#[post("/embed")]
pub async fn embed_text(
    req: web::Json<EmbedTextRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().finish());
    }

    // Still loading: turn the request away rather than queue it
    if !state.is_ready().await {
        return Ok(HttpResponse::BadRequest().finish());
    }

    let embedding = state
        .provider
        .embed(&state.config.embedding_model, &req.text)
        .await
        .map_err(ApiError)?;

    debug!(
        "Embedded text - length {}, dimension {}",
        req.text.len(),
        embedding.len()
    );

    Ok(HttpResponse::Ok().json(EmbedTextResponse {
        embeddings: embedding,
    }))
}
