use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoQuizRepository,
    services::{
        gemini_service::GeminiClient, page_fetcher::HttpPageFetcher, quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let fetcher = Arc::new(HttpPageFetcher::new());
        let generator = Arc::new(GeminiClient::from_config(&config));
        let quiz_service = Arc::new(QuizService::new(quiz_repository, fetcher, generator));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
