use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::errors::{AppError, AppResult};

/// Wikipedia rejects clients without a browser-looking agent string.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the raw HTML for `url`. Any transport failure or non-2xx
    /// status is a scrape failure; the caller must not proceed to extraction.
    async fn fetch(&self, url: &str) -> AppResult<String>;
}

pub struct HttpPageFetcher {
    http: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|err| {
                log::warn!("page fetch for {} failed: {}", url, err);
                AppError::Scrape
            })?;

        if !response.status().is_success() {
            log::warn!("page fetch for {} returned {}", url, response.status());
            return Err(AppError::Scrape);
        }

        response.text().await.map_err(|err| {
            log::warn!("page body read for {} failed: {}", url, err);
            AppError::Scrape
        })
    }
}
