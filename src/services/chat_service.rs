use async_trait::async_trait;
use log::{debug, error};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Conversational-AI collaborator behind `/send-message`. Keyed by the
/// caller-supplied session id; shares no state with the quiz core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatAgent: Send + Sync {
    async fn detect_intent(&self, message: &str, session_id: &str) -> AppResult<String>;
}

/// REST client for the Dialogflow `detectIntent` endpoint.
pub struct DialogflowClient {
    http: reqwest::Client,
    api_base: String,
    project_id: String,
    access_token: secrecy::SecretString,
    language_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentRequest {
    query_input: QueryInput,
}

#[derive(Debug, Serialize)]
struct QueryInput {
    text: TextInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextInput {
    text: String,
    language_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentResponse {
    query_result: Option<QueryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResult {
    #[serde(default)]
    fulfillment_text: String,
}

impl DialogflowClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_base: config.dialogflow_api_base.trim_end_matches('/').to_string(),
            project_id: config.dialogflow_project_id.clone(),
            access_token: config.dialogflow_access_token.clone(),
            language_code: config.dialogflow_language_code.clone(),
        }
    }

    fn session_endpoint(&self, session_id: &str) -> String {
        format!(
            "{}/v2/projects/{}/agent/sessions/{}:detectIntent",
            self.api_base, self.project_id, session_id
        )
    }
}

#[async_trait]
impl ChatAgent for DialogflowClient {
    async fn detect_intent(&self, message: &str, session_id: &str) -> AppResult<String> {
        debug!("forwarding chat message for session {session_id}");

        let body = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text: message.to_string(),
                    language_code: self.language_code.clone(),
                },
            },
        };

        let response = self
            .http
            .post(self.session_endpoint(session_id))
            .bearer_auth(self.access_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                error!("dialogflow request failed: {err}");
                AppError::InternalError("Error communicating with Dialogflow.".to_string())
            })?;

        if !response.status().is_success() {
            error!("dialogflow returned status {}", response.status());
            return Err(AppError::InternalError(
                "Error communicating with Dialogflow.".to_string(),
            ));
        }

        let payload: DetectIntentResponse = response.json().await.map_err(|err| {
            error!("dialogflow reply was not valid JSON: {err}");
            AppError::InternalError("Error communicating with Dialogflow.".to_string())
        })?;

        Ok(payload
            .query_result
            .map(|result| result.fulfillment_text)
            .unwrap_or_default())
    }
}
