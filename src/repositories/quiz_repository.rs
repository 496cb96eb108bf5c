use async_trait::async_trait;
use chrono::Utc;
#[cfg(test)]
use mockall::automock;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuiz, Quiz},
};

/// Storage for quiz records. Create-then-read-only: no update or delete
/// operations exist.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Persists the quiz, assigning its id and timestamps.
    async fn insert(&self, quiz: NewQuiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    /// All quizzes, newest first by generation date.
    async fn list_all(&self) -> AppResult<Vec<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let now = Utc::now();
        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            url: quiz.url,
            title: quiz.title,
            summary: quiz.summary,
            scraped_content: quiz.scraped_content,
            quiz_data: quiz.quiz_data,
            key_entities: quiz.key_entities,
            sections: quiz.sections,
            related_topics: quiz.related_topics,
            date_generated: now,
            created_at: now,
        };

        self.collection
            .insert_one(&quiz)
            .await
            .map_err(|err| AppError::Database(err.to_string()))?;

        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        use futures::TryStreamExt;

        let find_options = FindOptions::builder()
            .sort(doc! { "date_generated": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok(items)
    }
}
