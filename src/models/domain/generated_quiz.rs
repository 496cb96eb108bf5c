use serde_json::Value;

use crate::models::domain::quiz_question::{KeyEntities, QuizQuestion};

/// The quiz the model produced, after field-level defaulting. This is the
/// assembler step between the raw JSON span pulled out of the model reply and
/// the record handed to the repository.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedQuiz {
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub key_entities: KeyEntities,
    pub quiz_data: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
}

impl GeneratedQuiz {
    /// Builds the canonical quiz from the parsed model JSON. Defaults are
    /// applied per top-level field only: a missing `key_entities` becomes the
    /// all-empty object, while a present-but-partial one is kept as provided
    /// with absent categories staying absent. Questions are not validated.
    pub fn from_model_value(value: &Value, page_title: &str) -> Self {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(page_title)
            .to_string();

        let summary = value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let key_entities = value
            .get("key_entities")
            .map(|v| serde_json::from_value(v.clone()).unwrap_or_else(|_| KeyEntities::empty()))
            .unwrap_or_else(KeyEntities::empty);

        GeneratedQuiz {
            title,
            summary,
            sections: string_list(value.get("sections")),
            key_entities,
            quiz_data: question_list(value.get("quiz_data")),
            related_topics: string_list(value.get("related_topics")),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn question_list(value: Option<&Value>) -> Vec<QuizQuestion> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}
