use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::read_json;
use crate::config::Config;
use crate::error::Result;

/// Client for the news headline API.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base: String,
    api_key: String,
}

impl NewsClient {
    /// Fails when no API key is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.news_api_key()?;
        Ok(Self {
            client: Client::new(),
            base: config.news_url().to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Top headlines matching a keyword.
    pub async fn top_headlines(&self, query: &str) -> Result<Vec<Article>> {
        let url = format!(
            "{}?q={}&apiKey={}",
            self.base,
            urlencoding::encode(query),
            self.api_key,
        );
        debug!("GET {}", self.base);
        let response: Headlines = read_json(self.client.get(&url).send().await?).await?;
        Ok(response.articles)
    }
}

#[derive(Deserialize, Debug)]
struct Headlines {
    #[serde(default)]
    articles: Vec<Article>,
}

/// A headline. Removed articles come back with most fields nulled, so
/// everything beyond the link is optional.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Option<Source>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Source {
    #[serde(default)]
    pub name: Option<String>,
}
