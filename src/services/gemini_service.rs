use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    constants::quiz_prompt::build_quiz_prompt,
    errors::{AppError, AppResult},
    models::domain::GeneratedQuiz,
};

// Fixed generation settings; the prompt carries the rest of the contract.
const TEMPERATURE: f64 = 0.7;
const TOP_K: i32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: i32 = 2048;

// Greedy first-`{`-to-last-`}` span; the only structural validation applied
// to the model reply before JSON parsing.
static JSON_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON span pattern is a valid regex"));

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, content: &str, page_title: &str) -> AppResult<GeneratedQuiz>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            endpoint: config.gemini_endpoint.clone(),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: i32,
    top_p: f64,
    max_output_tokens: i32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl QuizGenerator for GeminiClient {
    async fn generate(&self, content: &str, page_title: &str) -> AppResult<GeneratedQuiz> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(AppError::Config("GEMINI_API_KEY"))?;

        let prompt = build_quiz_prompt(page_title, content);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| AppError::Model(format!("Gemini request failed: {}", err)))?;

        if !response.status().is_success() {
            return Err(AppError::Model(format!(
                "Gemini API error: {}",
                response.status().as_u16()
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AppError::Model(format!("Gemini response decode failed: {}", err)))?;

        let text = result
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| AppError::Model("No response from Gemini".to_string()))?;

        parse_generated_quiz(text, page_title)
    }
}

/// Pulls the JSON object out of the freeform model reply and assembles the
/// quiz. No retry on a malformed reply: a hallucinated or truncated JSON body
/// is a hard failure surfaced to the caller.
pub fn parse_generated_quiz(text: &str, page_title: &str) -> AppResult<GeneratedQuiz> {
    let span = JSON_SPAN.find(text).ok_or(AppError::Parse)?;
    let parsed: Value = serde_json::from_str(span.as_str()).map_err(|_| AppError::Parse)?;

    Ok(GeneratedQuiz::from_model_value(&parsed, page_title))
}
