use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::info;

use crate::{
    constants::tutor_prompt::build_tutor_prompt,
    errors::{AppError, AppResult},
    models::domain::TutorSession,
    models::dto::response::TutorChatResponse,
    services::question_provider::GenerativeModel,
};

/// Interactive tutoring around a pasted question. Sessions live in memory,
/// keyed by the caller-supplied session id, and hold the base question plus
/// the running conversation history that is fed back into every prompt.
pub struct TutorService {
    model: Arc<dyn GenerativeModel>,
    sessions: Mutex<HashMap<String, TutorSession>>,
}

impl TutorService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Answers one follow-up message. A supplied `question` creates the
    /// session context or replaces the stored base question. The exchange is
    /// appended to the session history only after the model replies.
    pub async fn chat(
        &self,
        session_id: &str,
        question: Option<&str>,
        message: &str,
    ) -> AppResult<TutorChatResponse> {
        // Snapshot the context; the lock must not be held across the await.
        let snapshot = {
            let mut sessions = self.lock_sessions()?;
            let session = sessions.entry(session_id.to_string()).or_default();
            if let Some(question) = question {
                session.question = question.to_string();
            }
            session.clone()
        };

        let history_json = serde_json::to_string_pretty(&snapshot.history)
            .map_err(|err| AppError::InternalError(err.to_string()))?;
        let prompt = build_tutor_prompt(&snapshot.question, &history_json, message);

        let reply = self.model.generate_content(&prompt).await?;
        if reply.trim().is_empty() {
            return Err(AppError::InternalError(
                "Empty response from model".to_string(),
            ));
        }

        let history = {
            let mut sessions = self.lock_sessions()?;
            let session = sessions.entry(session_id.to_string()).or_default();
            session.record_turn(message, &reply);
            session.history.clone()
        };

        Ok(TutorChatResponse {
            response: reply,
            history,
        })
    }

    /// Drops a session and its history. Unknown ids are an error so the
    /// caller can tell a reset apart from a no-op.
    pub fn reset(&self, session_id: &str) -> AppResult<()> {
        let mut sessions = self.lock_sessions()?;
        match sessions.remove(session_id) {
            Some(_) => {
                info!("tutor session {session_id} reset");
                Ok(())
            }
            None => Err(AppError::SessionNotFound),
        }
    }

    fn lock_sessions(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, TutorSession>>> {
        self.sessions
            .lock()
            .map_err(|_| AppError::InternalError("tutor session store poisoned".to_string()))
    }
}
