use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;

/// One slot per question. Set at most once, at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerSlot {
    Unanswered,
    Answered(String),
}

impl AnswerSlot {
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerSlot::Answered(_))
    }
}

/// Result of submitting an answer for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    /// Carries the correct option text so the renderer can highlight it.
    Incorrect { correct_answer: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

/// One row of the post-quiz review screen. Pure projection of session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub user_answer: Option<String>,
    pub was_correct: bool,
}

/// One quiz attempt, scoped to a single page load. Owns the question list,
/// the cursor, the score, and the recorded answers.
///
/// The question list is fixed at creation. `current_index` only moves forward,
/// one step at a time, and never past the last question. `score` is mutated in
/// exactly one place, `submit_answer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    user_answers: Vec<AnswerSlot>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::EmptyQuestionSet);
        }

        let total = questions.len();
        Ok(QuizSession {
            questions,
            current_index: 0,
            score: 0,
            user_answers: vec![AnswerSlot::Unanswered; total],
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index == self.questions.len() - 1
    }

    /// Records the selected answer for the current question and scores it.
    /// The slot is set at most once; a second submit for the same index is
    /// rejected with `AlreadyAnswered`.
    pub fn submit_answer(&mut self, selected: &str) -> AppResult<SubmitOutcome> {
        if selected.trim().is_empty() {
            return Err(AppError::ValidationError(
                "An answer must be selected before submitting".to_string(),
            ));
        }
        if self.user_answers[self.current_index].is_answered() {
            return Err(AppError::AlreadyAnswered(self.current_index));
        }

        let trimmed = selected.trim().to_string();
        self.user_answers[self.current_index] = AnswerSlot::Answered(trimmed.clone());

        let question = &self.questions[self.current_index];
        if question.is_correct(&trimmed) {
            self.score += 1;
            Ok(SubmitOutcome::Correct)
        } else {
            Ok(SubmitOutcome::Incorrect {
                correct_answer: question.correct_answer.trim().to_string(),
            })
        }
    }

    /// The correct answer for the current question, for learners who opt to
    /// skip answering. No effect on answers or score.
    pub fn reveal_answer(&self) -> &str {
        self.questions[self.current_index].correct_answer.trim()
    }

    /// Moves to the next question. Submission is not required first; a skipped
    /// slot stays unanswered and still counts toward the total.
    pub fn advance(&mut self) -> AppResult<()> {
        if self.is_last_question() {
            return Err(AppError::AtLastQuestion);
        }
        self.current_index += 1;
        Ok(())
    }

    /// The quiz ends only when the last question has been explicitly
    /// submitted. Reaching it via `advance` leaves the quiz open.
    pub fn is_complete(&self) -> bool {
        self.is_last_question() && self.user_answers[self.current_index].is_answered()
    }

    /// Current tally. Valid at any point, not necessarily final.
    pub fn summarize(&self) -> Summary {
        Summary {
            score: self.score,
            total: self.questions.len(),
        }
    }

    /// Pure read projection for the review screen. Idempotent.
    pub fn build_review(&self) -> Vec<ReviewEntry> {
        self.questions
            .iter()
            .zip(self.user_answers.iter())
            .map(|(question, slot)| {
                let user_answer = match slot {
                    AnswerSlot::Answered(answer) => Some(answer.clone()),
                    AnswerSlot::Unanswered => None,
                };
                let was_correct = user_answer
                    .as_deref()
                    .map(|answer| question.is_correct(answer))
                    .unwrap_or(false);

                ReviewEntry {
                    question: question.text.clone(),
                    options: question.options.clone(),
                    correct_answer: question.correct_answer.trim().to_string(),
                    user_answer,
                    was_correct,
                }
            })
            .collect()
    }
}
