use std::sync::Arc;

use log::{info, warn};

use crate::{
    constants::quiz_prompt::{build_quiz_prompt, default_explanation},
    errors::{AppError, AppResult},
    models::dto::{
        request::GenerateQuestionsRequest,
        response::{GenerateQuestionsResponse, QuestionDto},
    },
    services::question_provider::GenerativeModel,
};

/// Turns a {topic, count, difficulty} request into a set of multiple-choice
/// questions by prompting the generative model and reshaping its reply.
pub struct QuizGenerationService {
    model: Arc<dyn GenerativeModel>,
}

impl QuizGenerationService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> AppResult<GenerateQuestionsResponse> {
        let prompt = build_quiz_prompt(&request.topic, request.count, &request.difficulty);

        info!(
            "generating {} questions on \"{}\" ({})",
            request.count, request.topic, request.difficulty
        );

        let raw = self.model.generate_content(&prompt).await?;
        let cleaned = strip_code_fences(&raw);

        let mut response: GenerateQuestionsResponse = serde_json::from_str(cleaned)
            .map_err(|err| AppError::MalformedProviderResponse(err.to_string()))?;

        if response.questions.is_empty() {
            warn!("provider returned an empty question list for \"{}\"", request.topic);
            return Err(AppError::NoQuestionsGenerated);
        }

        for question in &mut response.questions {
            fill_default_explanation(question, &request.topic);
        }

        Ok(response)
    }
}

/// Strips a leading ```json (or bare ```) fence and a trailing ``` fence.
/// Models are told to return bare JSON but routinely wrap it anyway.
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }

    if let Some(rest) = cleaned.trim_end().strip_suffix("```") {
        cleaned = rest;
    }

    cleaned.trim()
}

fn fill_default_explanation(question: &mut QuestionDto, topic: &str) {
    let missing = question
        .explanation
        .as_deref()
        .map(|e| e.trim().is_empty())
        .unwrap_or(true);

    if missing {
        question.explanation = Some(default_explanation(topic, &question.answer));
    }
}
