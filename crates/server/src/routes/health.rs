use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Report readiness and index statistics
#[get("/health")]
pub async fn health(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let response = match state.ready_index().await {
        Some(index) => HealthResponse {
            status: "ready".to_string(),
            embedding_model: index.embedding_model().to_string(),
            answer_count: index.len(),
            ready_since: Some(index.built_at()),
        },
        None => HealthResponse {
            status: "loading".to_string(),
            embedding_model: state.config.embedding_model.clone(),
            answer_count: 0,
            ready_since: None,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}
