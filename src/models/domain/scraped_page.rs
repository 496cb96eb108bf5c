/// Plain-text article pulled out of a Wikipedia page, whitespace-normalized
/// and bounded to the truncation budget. Lives only for the duration of one
/// generate request; the content is carried into the persisted quiz as
/// `scraped_content`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedPage {
    pub title: String,
    pub content: String,
}
