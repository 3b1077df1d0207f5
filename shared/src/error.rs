use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl actix_web::ResponseError for SharedError {
    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            SharedError::Validation(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::NotFound(_) => actix_web::HttpResponse::NotFound().json(self),
            SharedError::BadRequest(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::Conversion(_) => actix_web::HttpResponse::BadRequest().json(self),
            SharedError::Internal(_) => actix_web::HttpResponse::InternalServerError().json(self),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SharedError::NotFound("Applicant 99".to_string()).to_string(),
            "Not found: Applicant 99"
        );
        assert_eq!(
            SharedError::Validation("bad category".to_string()).to_string(),
            "Validation error: bad category"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: SharedError = json_error.into();
        assert!(matches!(error, SharedError::Conversion(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_response_status_codes() {
        use actix_web::ResponseError;

        assert_eq!(SharedError::NotFound("x".into()).error_response().status().as_u16(), 404);
        assert_eq!(SharedError::Validation("x".into()).error_response().status().as_u16(), 400);
        assert_eq!(SharedError::Internal("x".into()).error_response().status().as_u16(), 500);
    }
}
