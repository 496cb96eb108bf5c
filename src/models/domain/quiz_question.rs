use serde::{Deserialize, Serialize};

/// One multiple-choice question as returned by the model. Every field falls
/// back to its empty value when missing; the pipeline performs no per-question
/// validation, so an unexpected difficulty string or a short options list is
/// stored exactly as the model produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
    /// Expected values: easy | medium | hard.
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub explanation: String,
}

/// Named entities the model identified in the article. A category the model
/// omitted stays absent in storage rather than being defaulted per-field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyEntities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
}

impl KeyEntities {
    /// The all-empty default, used only when the model omits `key_entities`
    /// entirely. A present-but-partial object is preserved as provided.
    pub fn empty() -> Self {
        Self {
            people: Some(vec![]),
            organizations: Some(vec![]),
            locations: Some(vec![]),
        }
    }
}
