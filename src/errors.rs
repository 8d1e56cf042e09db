use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    // Session misuse; the renderer's own gating should make these unreachable.
    #[error("Cannot create a quiz session from an empty question set")]
    EmptyQuestionSet,

    #[error("Question {0} has already been answered")]
    AlreadyAnswered(usize),

    #[error("Already at the last question")]
    AtLastQuestion,

    // Provider-facing failures, surfaced as a single user-visible notice.
    #[error("Question provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Question provider returned malformed JSON: {0}")]
    MalformedProviderResponse(String),

    #[error("No questions were generated.")]
    NoQuestionsGenerated,

    #[error("Session not found.")]
    SessionNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EmptyQuestionSet => "EMPTY_QUESTION_SET",
            AppError::AlreadyAnswered(_) => "ALREADY_ANSWERED",
            AppError::AtLastQuestion => "AT_LAST_QUESTION",
            AppError::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            AppError::MalformedProviderResponse(_) => "MALFORMED_PROVIDER_RESPONSE",
            AppError::NoQuestionsGenerated => "NO_QUESTIONS_GENERATED",
            AppError::SessionNotFound => "SESSION_NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyQuestionSet => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AlreadyAnswered(_) => StatusCode::CONFLICT,
            AppError::AtLastQuestion => StatusCode::CONFLICT,
            AppError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedProviderResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::NoQuestionsGenerated => StatusCode::BAD_GATEWAY,
            AppError::SessionNotFound => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ProviderUnavailable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::EmptyQuestionSet.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::AlreadyAnswered(2).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ProviderUnavailable("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::NoQuestionsGenerated.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::AlreadyAnswered(3);
        assert_eq!(err.to_string(), "Question 3 has already been answered");

        let err = AppError::NoQuestionsGenerated;
        assert_eq!(err.to_string(), "No questions were generated.");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            AppError::EmptyQuestionSet.error_code(),
            AppError::AlreadyAnswered(0).error_code(),
            AppError::AtLastQuestion.error_code(),
            AppError::ProviderUnavailable(String::new()).error_code(),
            AppError::MalformedProviderResponse(String::new()).error_code(),
            AppError::NoQuestionsGenerated.error_code(),
            AppError::SessionNotFound.error_code(),
        ];
        let mut deduped = codes.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }

    #[actix_web::test]
    async fn test_error_response_body_carries_the_string_code() {
        let response = AppError::NoQuestionsGenerated.error_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"].as_str().unwrap(), "No questions were generated.");
        assert_eq!(body["code"].as_u64().unwrap(), 502);
        assert_eq!(body["error_code"].as_str().unwrap(), "NO_QUESTIONS_GENERATED");
    }

    #[test]
    fn test_session_not_found_maps_to_404() {
        assert_eq!(
            AppError::SessionNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
