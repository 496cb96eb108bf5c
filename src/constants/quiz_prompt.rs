/// Builds the instruction sent to the model. The JSON schema spelled out in
/// the template is the contract the response parser relies on: the reply is
/// expected to be a single JSON object, and the parser locates it with a
/// brace-delimited span and nothing more, so the schema description and the
/// JSON-only rule must stay in the prompt.
pub fn build_quiz_prompt(page_title: &str, content: &str) -> String {
    format!(
        r#"You are an expert quiz generator. Create a quiz from this Wikipedia article.

Article Title: {page_title}

Content:
{content}

Generate EXACTLY this JSON structure (no markdown, no extra text):
{{
  "title": "{page_title}",
  "summary": "2-3 sentence summary of the article",
  "sections": ["Section 1", "Section 2"],
  "key_entities": {{
    "people": ["Name1", "Name2"],
    "organizations": ["Org1", "Org2"],
    "locations": ["Location1", "Location2"]
  }},
  "quiz_data": [
    {{
      "question": "Question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "answer": "Option A",
      "difficulty": "easy",
      "explanation": "Explanation text"
    }}
  ],
  "related_topics": ["Topic1", "Topic2"]
}}

Rules:
- Generate 5-8 questions
- Vary difficulty: some easy, some medium, some hard
- All facts must come from the provided content
- Only respond with valid JSON"#
    )
}
