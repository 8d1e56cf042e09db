use async_trait::async_trait;
use log::debug;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Seam to the generative-language API. Takes a prompt, returns the model's
/// reply text. Everything that interprets that text lives in the generation
/// service so it can be tested against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> AppResult<String>;
}

/// REST client for the Google generative-language API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: secrecy::SecretString,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        debug!("sending prompt to model {}", self.model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderUnavailable(format!(
                "model API returned {status}: {detail}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AppError::MalformedProviderResponse(err.to_string()))?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                AppError::MalformedProviderResponse("response contained no candidates".to_string())
            })
    }
}
