use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        chat_service::{ChatAgent, DialogflowClient},
        question_provider::{GeminiClient, GenerativeModel},
        quiz_generation_service::QuizGenerationService,
        tutor_service::TutorService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generation: Arc<QuizGenerationService>,
    pub tutor: Arc<TutorService>,
    pub chat_agent: Arc<dyn ChatAgent>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| AppError::InternalError(err.to_string()))?;

        // Quiz generation and the tutor share one model client.
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(http.clone(), &config));
        let quiz_generation = Arc::new(QuizGenerationService::new(model.clone()));
        let tutor = Arc::new(TutorService::new(model));
        let chat_agent = Arc::new(DialogflowClient::new(http, &config));

        Ok(Self {
            quiz_generation,
            tutor,
            chat_agent,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.dialogflow_project_id, "questionbot-test");
    }
}
