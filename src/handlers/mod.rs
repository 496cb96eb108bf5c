pub mod quiz_handler;

pub use quiz_handler::{generate_quiz, get_quiz, health_check, json_error_handler, list_quizzes};
