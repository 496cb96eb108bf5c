pub mod article_extractor;
pub mod gemini_service;
pub mod page_fetcher;
pub mod quiz_service;
