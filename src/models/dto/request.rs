use serde::Deserialize;
use validator::Validate;

/// Body of `POST /generate-questions`, sent by the quiz setup screen.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, max = 200, message = "Topic must not be empty"))]
    pub topic: String,

    #[validate(range(min = 1, max = 50, message = "Count must be between 1 and 50"))]
    pub count: u32,

    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,
}

/// Body of `POST /interactive-chat`. `question` sets or replaces the base
/// question the tutor session is anchored to; follow-up doubts omit it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorChatRequest {
    #[validate(length(min = 1, message = "Session ID is required."))]
    pub session_id: String,

    pub question: Option<String>,

    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

/// Body of `POST /reset-session`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetSessionRequest {
    #[validate(length(min = 1, message = "Session ID is required."))]
    pub session_id: String,
}

/// Body of `POST /send-message`. Field names follow the browser contract.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message and Session ID are required."))]
    pub message: String,

    #[serde(rename = "sessionId")]
    #[validate(length(min = 1, message = "Message and Session ID are required."))]
    pub session_id: String,
}
