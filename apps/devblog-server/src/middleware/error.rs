//! Error handling - every API failure is rendered as `{"success": false, "error": ...}`.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use devblog_core::DomainError;
use devblog_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type that converts to the JSON failure envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Maps JSON body extraction failures to a 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected JSON payload");

    let message = match &err {
        JsonPayloadError::ContentType => {
            "Se requiere un cuerpo JSON (Content-Type: application/json)".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("JSON inválido: {e}"),
        _ => "No se pudo leer el cuerpo JSON".to_string(),
    };

    AppError::BadRequest(message).into()
}

/// Maps query string parse failures to a 400 envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest(format!("Parámetros de consulta inválidos: {err}")).into()
}

/// A path segment that is not a post id names no post.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Unmatched path parameter");
    AppError::NotFound("Post no encontrado".to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_validation_maps_to_bad_request() {
        let err = AppError::from(DomainError::Validation("El título es requerido".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "El título es requerido");
    }

    #[actix_web::test]
    async fn test_not_found_status() {
        let err = AppError::NotFound("Post no encontrado".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Post no encontrado");
    }
}
