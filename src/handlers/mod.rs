pub mod chat_handler;
pub mod quiz_handler;
pub mod tutor_handler;

pub use chat_handler::send_message;
pub use quiz_handler::{generate_questions, health_check};
pub use tutor_handler::{interactive_chat, reset_session};
