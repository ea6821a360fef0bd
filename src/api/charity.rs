use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::read_json;
use crate::config::Config;
use crate::error::Result;

const PAGE_SIZE: u32 = 25;

/// Client for the third-party charity directory.
#[derive(Debug, Clone)]
pub struct CharityClient {
    client: Client,
    base: String,
    app_id: String,
    app_key: String,
}

impl CharityClient {
    /// Fails when the directory credentials are not configured.
    pub fn new(config: &Config) -> Result<Self> {
        let (app_id, app_key) = config.charity_credentials()?;
        Ok(Self {
            client: Client::new(),
            base: config.charity_url().to_string(),
            app_id: app_id.to_string(),
            app_key: app_key.to_string(),
        })
    }

    /// Keyword search over rated organisations.
    pub async fn search(&self, query: &str) -> Result<Vec<CharityOrg>> {
        let url = format!(
            "{}?app_id={}&app_key={}&pageSize={}&search={}&rated=true",
            self.base,
            self.app_id,
            self.app_key,
            PAGE_SIZE,
            urlencoding::encode(query),
        );
        // The full URL carries the credentials, so only the host is logged.
        debug!("GET {}", self.base);
        read_json(self.client.get(&url).send().await?).await
    }
}

/// The slice of a directory record the client renders or saves.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CharityOrg {
    pub ein: String,
    pub charity_name: String,
    #[serde(default)]
    pub tag_line: Option<String>,
    #[serde(default)]
    pub cause: Option<Cause>,
    #[serde(default)]
    pub current_rating: Option<Rating>,
    #[serde(rename = "websiteURL", default)]
    pub website_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    pub cause_name: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub rating_image: Option<RatingImage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RatingImage {
    pub large: String,
}
