use serde::{Deserialize, Serialize};

use crate::models::domain::{ChatTurn, Question};

/// Wire shape of one generated question. This is both what the provider
/// returns inside its JSON payload and what `/generate-questions` forwards
/// to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDto {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<QuestionDto>,
}

/// Reply of `POST /interactive-chat`: the tutor's answer plus the full
/// conversation so far, newest exchange last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorChatResponse {
    pub response: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetSessionResponse {
    pub message: String,
}

/// Reply of `POST /send-message`. Field name follows the browser contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "fulfillmentText")]
    pub fulfillment_text: String,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            question: question.text,
            options: question.options,
            answer: question.correct_answer,
            explanation: question.explanation,
        }
    }
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Question {
            text: dto.question,
            options: dto.options,
            correct_answer: dto.answer,
            explanation: dto.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_dto_round_trips_to_domain() {
        let dto = QuestionDto {
            question: "What is the SI unit of force?".to_string(),
            options: vec![
                "Newton".to_string(),
                "Joule".to_string(),
                "Pascal".to_string(),
                "Watt".to_string(),
            ],
            answer: "Newton".to_string(),
            explanation: Some("Force is measured in newtons.".to_string()),
        };

        let question: Question = dto.clone().into();
        assert_eq!(question.text, "What is the SI unit of force?");
        assert_eq!(question.correct_answer, "Newton");

        let back: QuestionDto = question.into();
        assert_eq!(back, dto);
    }

    #[test]
    fn test_chat_response_serializes_camel_case() {
        let response = ChatResponse {
            fulfillment_text: "Here are your questions".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("fulfillmentText"));
    }

    #[test]
    fn test_missing_explanation_is_omitted() {
        let dto = QuestionDto {
            question: "Q".to_string(),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            answer: "A".to_string(),
            explanation: None,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("explanation"));
    }
}
