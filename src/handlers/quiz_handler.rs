use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::GenerateQuestionsRequest,
};

/// Generates a fresh multiple-choice question set for the quiz setup screen.
/// Failures never create partial quiz state; the browser keeps the setup
/// screen visible and shows the error message.
#[post("/generate-questions")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.quiz_generation.generate(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;

    use crate::config::Config;
    use crate::services::question_provider::MockGenerativeModel;
    use crate::services::quiz_generation_service::QuizGenerationService;
    use crate::test_utils::test_helpers::{assert_error_status, assert_success_status};

    fn state_with_reply(reply: Result<&str, AppError>) -> AppState {
        let reply = reply.map(str::to_string);
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_content()
            .returning(move |_| reply.clone());

        let mut state = AppState::new(Config::test_config()).unwrap();
        state.quiz_generation = Arc::new(QuizGenerationService::new(Arc::new(model)));
        state
    }

    fn quiz_body() -> serde_json::Value {
        serde_json::json!({ "topic": "Optics", "count": 1, "difficulty": "easy" })
    }

    #[actix_web::test]
    async fn test_generate_questions_success() {
        let state = state_with_reply(Ok(r#"{
            "questions": [{
                "question": "What bends light in a lens?",
                "options": ["Refraction", "Reflection", "Diffusion", "Dispersion"],
                "answer": "Refraction"
            }]
        }"#));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate-questions")
            .set_json(quiz_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 1);
        // Missing explanation is synthesized from topic and answer.
        assert!(body["questions"][0]["explanation"]
            .as_str()
            .unwrap()
            .contains("Optics"));
    }

    #[actix_web::test]
    async fn test_generate_questions_rejects_empty_topic() {
        let state = state_with_reply(Ok("{}"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate-questions")
            .set_json(serde_json::json!({ "topic": "", "count": 3, "difficulty": "easy" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_generate_questions_surfaces_provider_failure() {
        let state = state_with_reply(Err(AppError::ProviderUnavailable(
            "connection refused".to_string(),
        )));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate_questions),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate-questions")
            .set_json(quiz_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());
    }
}
