use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use semantic_qa_common::SemanticQaError;
use std::fmt;

/// HTTP wrapper for [`SemanticQaError`]
///
/// Client-class (4xx) errors carry an empty body; server-class errors keep
/// their message so operators see the cause in responses too.
#[derive(Debug)]
pub struct ApiError(pub SemanticQaError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_client_error() {
            HttpResponse::build(status).finish()
        } else {
            HttpResponse::build(status).body(self.to_string())
        }
    }
}

impl From<SemanticQaError> for ApiError {
    fn from(e: SemanticQaError) -> Self {
        Self(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_client_errors_have_empty_body() {
        let err = ApiError(SemanticQaError::ModelNotReady);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_errors_map_to_bad_gateway() {
        let err = ApiError(SemanticQaError::embedding("backend unreachable"));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
