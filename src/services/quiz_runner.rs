use std::future::Future;

use log::{debug, warn};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuizSession, ReviewEntry, SubmitOutcome, Summary},
};

/// Everything a presentation surface must be able to do. The runner below is
/// the only code that talks to it; no view method ever reaches back to the
/// question provider.
pub trait QuizView {
    /// Enables or disables the "start quiz" control.
    fn set_start_enabled(&mut self, enabled: bool);
    /// Blocking notice shown when a quiz cannot start.
    fn show_notice(&mut self, message: &str);
    fn show_question(&mut self, index: usize, total: usize, question: &Question);
    /// Disables the option buttons and the submit control.
    fn lock_options(&mut self);
    fn show_feedback(&mut self, outcome: &SubmitOutcome);
    fn show_reveal(&mut self, correct_answer: &str);
    fn show_summary(&mut self, summary: &Summary);
    fn show_review(&mut self, entries: &[ReviewEntry]);
}

/// Drives one `QuizSession` against a `QuizView`. This is the adapter between
/// user actions and the session state machine; misuse errors from the session
/// (double submit, advance past the end) are treated as no-ops because the
/// view's own gating should prevent them.
pub struct QuizRunner<V: QuizView> {
    view: V,
    session: Option<QuizSession>,
}

impl<V: QuizView> QuizRunner<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            session: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Fetches questions and starts a fresh session, replacing any previous
    /// one. The start control is disabled for the duration of the fetch and
    /// re-enabled on every exit path, success or failure.
    pub async fn start<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Vec<Question>>>,
    {
        self.view.set_start_enabled(false);

        let started = match fetch().await {
            Ok(questions) => match QuizSession::new(questions) {
                Ok(session) => {
                    self.view
                        .show_question(0, session.total(), session.current_question());
                    self.session = Some(session);
                    true
                }
                Err(err) => {
                    self.view.show_notice(&err.to_string());
                    false
                }
            },
            Err(err) => {
                self.view.show_notice(&err.to_string());
                false
            }
        };

        self.view.set_start_enabled(true);
        started
    }

    /// Submits the selected answer for the current question. On the last
    /// question this also ends the quiz and shows the summary.
    pub fn submit(&mut self, selected: &str) {
        let Some(session) = self.session.as_mut() else {
            warn!("submit called with no active session");
            return;
        };

        match session.submit_answer(selected) {
            Ok(outcome) => {
                self.view.lock_options();
                self.view.show_feedback(&outcome);
                if session.is_complete() {
                    self.view.show_summary(&session.summarize());
                }
            }
            Err(AppError::AlreadyAnswered(index)) => {
                debug!("ignoring duplicate submit for question {index}");
            }
            Err(err) => self.view.show_notice(&err.to_string()),
        }
    }

    /// Moves to the next question, answered or not.
    pub fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            warn!("advance called with no active session");
            return;
        };

        match session.advance() {
            Ok(()) => {
                self.view.show_question(
                    session.current_index(),
                    session.total(),
                    session.current_question(),
                );
            }
            Err(AppError::AtLastQuestion) => {
                debug!("ignoring advance past the last question");
            }
            Err(err) => self.view.show_notice(&err.to_string()),
        }
    }

    /// Shows the correct answer without recording a submission. Options are
    /// locked so the reveal cannot be followed by a scored submit.
    pub fn reveal(&mut self) {
        let Some(session) = self.session.as_ref() else {
            warn!("reveal called with no active session");
            return;
        };

        let answer = session.reveal_answer().to_string();
        self.view.lock_options();
        self.view.show_reveal(&answer);
    }

    /// Renders the post-quiz review from session state alone.
    pub fn review(&mut self) {
        let Some(session) = self.session.as_ref() else {
            warn!("review called with no active session");
            return;
        };

        let entries = session.build_review();
        self.view.show_review(&entries);
    }
}
