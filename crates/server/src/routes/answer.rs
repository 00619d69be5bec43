use actix_web::{post, web, HttpResponse};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{AnswerRequest, AnswerResponse};

/// Return the pre-computed answer most similar to the question
#[post("/answer")]
pub async fn answer(
    req: web::Json<AnswerRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.question.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().finish());
    }

    let Some(index) = state.ready_index().await else {
        // Still loading: turn the request away rather than queue it
        return Ok(HttpResponse::BadRequest().finish());
    };

    let query_embedding = state
        .provider
        .embed(&state.config.embedding_model, &req.question)
        .await
        .map_err(ApiError)?;

    let answer = index
        .best_answer(&query_embedding)
        .map_err(ApiError)?
        .to_string();

    debug!("Matched answer for question ({} chars)", req.question.len());

    Ok(HttpResponse::Ok().json(AnswerResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loading_state, ready_state};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_answer_blank_question_rejected() {
        let state = ready_state().await;
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(answer),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/answer")
            .set_json(serde_json::json!({ "question": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_answer_rejected_while_loading() {
        let state = loading_state();
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(answer),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/answer")
            .set_json(serde_json::json!({ "question": "What is the capital of France?" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_answer_returns_most_similar() {
        let state = ready_state().await;
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(answer),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/answer")
            .set_json(serde_json::json!({ "question": "What is the capital of France?" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["answer"], "The capital of France is Paris.");
    }
}
