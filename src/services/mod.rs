pub mod chat_service;
pub mod question_provider;
pub mod quiz_generation_service;
pub mod quiz_runner;
pub mod tutor_service;
