use log::debug;
use outline_core::country::{article_url, normalize_country};
use reqwest::StatusCode;

use crate::config::OutlineConfig;
use crate::prelude::Error;

/// Raw article page as returned by the wiki
#[derive(Debug, Clone)]
pub struct Article {
    pub country: String,
    pub url: String,
    pub html: String,
}

/// Fetches Wikipedia article pages by country name. Never retries.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(config: &OutlineConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.wiki_url.clone(),
        })
    }

    /// Article URL for a country, failing with [`Error::EmptyInput`] on blank names
    pub fn article_url(&self, country: &str) -> Result<String, Error> {
        let title = normalize_country(country)?;
        Ok(article_url(&self.base_url, &urlencoding::encode(&title)))
    }

    pub async fn fetch_article(&self, country: &str) -> Result<Article, Error> {
        let url = self.article_url(country)?;
        let country = country.trim().to_string();

        debug!("Fetching article for '{country}' from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::FetchError(format!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(country));
        }

        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "Failed to fetch {url}: HTTP {status}"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::FetchError(format!("Failed to read body of {url}: {e}")))?;

        debug!("Fetched {} bytes from {url}", html.len());

        Ok(Article { country, url, html })
    }
}
