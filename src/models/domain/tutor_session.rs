use serde::{Deserialize, Serialize};

/// One user/tutor exchange in an interactive chat session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
}

/// Conversation context for one tutor session: the question the learner is
/// studying plus everything said so far. Lives only in memory, keyed by the
/// caller-supplied session id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorSession {
    pub question: String,
    pub history: Vec<ChatTurn>,
}

impl TutorSession {
    pub fn record_turn(&mut self, user: &str, bot: &str) {
        self.history.push(ChatTurn {
            user: user.to_string(),
            bot: bot.to_string(),
        });
    }
}
