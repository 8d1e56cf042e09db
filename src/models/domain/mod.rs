pub mod question;
pub mod quiz_session;
pub mod tutor_session;

pub use question::Question;
pub use quiz_session::{AnswerSlot, QuizSession, ReviewEntry, SubmitOutcome, Summary};
pub use tutor_session::{ChatTurn, TutorSession};
