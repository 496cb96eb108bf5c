use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizRequest {
    /// Absent or blank url is rejected with a 400 before any scraping starts.
    #[serde(default)]
    pub url: Option<String>,
}
