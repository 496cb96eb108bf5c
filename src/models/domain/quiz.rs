use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::generated_quiz::GeneratedQuiz;
use crate::models::domain::quiz_question::{KeyEntities, QuizQuestion};

/// The persisted aggregate. Create-then-read-only: there is no update path,
/// so a stored quiz never changes after insert.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String, // assigned by the repository at insert
    pub url: String,
    pub title: String,
    pub summary: String,
    pub scraped_content: String,
    pub quiz_data: Vec<QuizQuestion>,
    pub key_entities: KeyEntities,
    pub sections: Vec<String>,
    pub related_topics: Vec<String>,
    pub date_generated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A quiz ready for storage, before the repository assigns identity and
/// timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewQuiz {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub scraped_content: String,
    pub quiz_data: Vec<QuizQuestion>,
    pub key_entities: KeyEntities,
    pub sections: Vec<String>,
    pub related_topics: Vec<String>,
}

impl NewQuiz {
    pub fn from_generated(url: &str, scraped_content: String, generated: GeneratedQuiz) -> Self {
        NewQuiz {
            url: url.to_string(),
            title: generated.title,
            summary: generated.summary,
            scraped_content,
            quiz_data: generated.quiz_data,
            key_entities: generated.key_entities,
            sections: generated.sections,
            related_topics: generated.related_topics,
        }
    }
}
