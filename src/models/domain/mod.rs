pub mod generated_quiz;
pub mod quiz;
pub mod quiz_question;
pub mod scraped_page;

pub use generated_quiz::GeneratedQuiz;
pub use quiz::{NewQuiz, Quiz};
pub use quiz_question::{KeyEntities, QuizQuestion};
pub use scraped_page::ScrapedPage;
