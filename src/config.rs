use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub gemini_api_base: String,
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub dialogflow_api_base: String,
    pub dialogflow_project_id: String,
    pub dialogflow_access_token: SecretString,
    pub dialogflow_language_code: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "dev_gemini_key".to_string()),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            dialogflow_api_base: env::var("DIALOGFLOW_API_BASE")
                .unwrap_or_else(|_| "https://dialogflow.googleapis.com".to_string()),
            dialogflow_project_id: env::var("DIALOGFLOW_PROJECT_ID")
                .unwrap_or_else(|_| "questionbot-local".to_string()),
            dialogflow_access_token: SecretString::from(
                env::var("DIALOGFLOW_ACCESS_TOKEN")
                    .unwrap_or_else(|_| "dev_dialogflow_token".to_string()),
            ),
            dialogflow_language_code: env::var("DIALOGFLOW_LANGUAGE_CODE")
                .unwrap_or_else(|_| "en-US".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.gemini_api_key.expose_secret() == "dev_gemini_key" {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }

        if self.dialogflow_access_token.expose_secret() == "dev_dialogflow_token" {
            panic!(
                "FATAL: DIALOGFLOW_ACCESS_TOKEN is using default value! Set DIALOGFLOW_ACCESS_TOKEN environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            gemini_api_base: "http://127.0.0.1:9999".to_string(),
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model: "gemini-2.5-flash".to_string(),
            dialogflow_api_base: "http://127.0.0.1:9998".to_string(),
            dialogflow_project_id: "questionbot-test".to_string(),
            dialogflow_access_token: SecretString::from("test_dialogflow_token".to_string()),
            dialogflow_language_code: "en-US".to_string(),
        }
    }
}
