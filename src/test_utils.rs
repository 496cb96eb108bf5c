#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::GeneratedQuiz;

    /// Produces `count` short sentences so tests can control content length
    /// relative to the extraction gate and the truncation budget.
    pub fn filler_sentences(count: usize) -> String {
        (0..count)
            .map(|i| format!("Sentence {} of the article body.", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A structurally faithful Wikipedia page: firstHeading title and the
    /// mw-content-text container bounded by mw-navigation.
    pub fn wikipedia_page(title: &str, body: &str) -> String {
        format!(
            r#"<html><head><title>{title} - Wikipedia</title></head><body>
<h1 class="firstHeading">{title}</h1>
<div id="mw-content-text" class="mw-body-content">{body}</div>
<div id="mw-navigation">navigation links</div>
<div id="footer">footer</div>
</body></html>"#
        )
    }

    /// Model output JSON with the requested number of questions.
    pub fn model_quiz_json(title: &str, question_count: usize) -> Value {
        let questions: Vec<Value> = (0..question_count)
            .map(|i| {
                json!({
                    "question": format!("Question {}?", i),
                    "options": ["Option A", "Option B", "Option C", "Option D"],
                    "answer": "Option A",
                    "difficulty": if i % 2 == 0 { "easy" } else { "hard" },
                    "explanation": "Stated in the article."
                })
            })
            .collect();

        json!({
            "title": title,
            "summary": "A short summary.",
            "sections": ["History", "Legacy"],
            "key_entities": {
                "people": ["Ada Lovelace"],
                "organizations": [],
                "locations": ["London"]
            },
            "quiz_data": questions,
            "related_topics": ["Analytical Engine"]
        })
    }

    pub fn generated_quiz(title: &str, question_count: usize) -> GeneratedQuiz {
        GeneratedQuiz::from_model_value(&model_quiz_json(title, question_count), title)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_filler_sentences_are_sentence_terminated() {
        let text = filler_sentences(3);
        assert_eq!(text.matches('.').count(), 3);
        assert!(text.ends_with('.'));
    }

    #[test]
    fn test_model_quiz_json_question_count() {
        let value = model_quiz_json("T", 6);
        assert_eq!(value["quiz_data"].as_array().map(Vec::len), Some(6));
    }
}
