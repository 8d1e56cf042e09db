use serde::{Deserialize, Serialize};

/// A single multiple-choice question as received from the question provider.
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(
        text: &str,
        options: Vec<String>,
        correct_answer: &str,
        explanation: Option<String>,
    ) -> Self {
        Question {
            text: text.to_string(),
            options,
            correct_answer: correct_answer.to_string(),
            explanation,
        }
    }

    /// Whether the correct answer matches one of the options after trimming.
    /// Providers occasionally pad answers with whitespace, so matching is
    /// trimmed but case-sensitive.
    pub fn answer_is_among_options(&self) -> bool {
        self.options
            .iter()
            .any(|opt| opt.trim() == self.correct_answer.trim())
    }

    /// Checks a submitted answer against the correct one. Trimmed,
    /// case-sensitive comparison.
    pub fn is_correct(&self, selected: &str) -> bool {
        selected.trim() == self.correct_answer.trim()
    }
}
