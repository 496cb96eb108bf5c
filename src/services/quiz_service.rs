use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{NewQuiz, Quiz},
    repositories::QuizRepository,
    services::{
        article_extractor, gemini_service::QuizGenerator, page_fetcher::PageFetcher,
    },
};

/// Runs the generate pipeline end to end: fetch, extract, generate, persist.
/// Every step is sequential and nothing is retried; the first failure is
/// surfaced to the request boundary as-is.
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    fetcher: Arc<dyn PageFetcher>,
    generator: Arc<dyn QuizGenerator>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        fetcher: Arc<dyn PageFetcher>,
        generator: Arc<dyn QuizGenerator>,
    ) -> Self {
        Self {
            repository,
            fetcher,
            generator,
        }
    }

    /// Resubmitting the same URL re-scrapes and re-generates; there is no
    /// deduplication, so every call produces a new record.
    pub async fn generate_quiz(&self, url: &str) -> AppResult<Quiz> {
        let html = self.fetcher.fetch(url).await?;

        let page = article_extractor::extract_article(&html).ok_or(AppError::Scrape)?;
        log::info!(
            "scraped \"{}\" ({} chars) from {}",
            page.title,
            page.content.len(),
            url
        );

        let generated = self.generator.generate(&page.content, &page.title).await?;

        let quiz = self
            .repository
            .insert(NewQuiz::from_generated(url, page.content, generated))
            .await?;
        log::info!("stored quiz {} with {} questions", quiz.id, quiz.quiz_data.len());

        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list_all().await
    }
}
