use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::charity::CharityOrg;
use super::{ensure_success, read_json};
use crate::campaign::{Campaign, Comment, NewCampaign, NewComment, NewDonation};
use crate::config::Config;
use crate::error::Result;

/// Client for the campaign backend. One instance per command is plenty;
/// every call is a single request with no retry policy.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base: config.api_url().to_string(),
        }
    }

    pub async fn all_campaigns(&self) -> Result<Vec<Campaign>> {
        let url = format!("{}/campaigns/all", self.base);
        debug!("GET {url}");
        read_json(self.client.get(&url).send().await?).await
    }

    pub async fn pending_campaigns(&self) -> Result<Vec<Campaign>> {
        let url = format!("{}/campaigns/pending", self.base);
        debug!("GET {url}");
        read_json(self.client.get(&url).send().await?).await
    }

    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign> {
        let url = format!("{}/campaigns/create", self.base);
        debug!("POST {url}");
        read_json(self.client.post(&url).json(campaign).send().await?).await
    }

    pub async fn donate(&self, id: &str, donation: &NewDonation) -> Result<()> {
        let url = format!("{}/campaigns/donate/{id}", self.base);
        debug!("POST {url}");
        ensure_success(self.client.post(&url).json(donation).send().await?).await
    }

    pub async fn approve(&self, id: &str) -> Result<()> {
        let url = format!("{}/campaigns/approve/{id}", self.base);
        debug!("PUT {url}");
        ensure_success(self.client.put(&url).send().await?).await
    }

    pub async fn reject(&self, id: &str) -> Result<()> {
        let url = format!("{}/campaigns/reject/{id}", self.base);
        debug!("PUT {url}");
        ensure_success(self.client.put(&url).send().await?).await
    }

    pub async fn comments(&self, id: &str) -> Result<Vec<Comment>> {
        let url = format!("{}/campaigns/comments/{id}", self.base);
        debug!("GET {url}");
        let thread: CommentThread = read_json(self.client.get(&url).send().await?).await?;
        Ok(thread.comments)
    }

    pub async fn add_comment(&self, id: &str, comment: &NewComment) -> Result<()> {
        let url = format!("{}/campaigns/comment/{id}", self.base);
        debug!("POST {url}");
        ensure_success(self.client.post(&url).json(comment).send().await?).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let url = format!("{}/register", self.base);
        debug!("POST {url}");
        ensure_success(self.client.post(&url).json(registration).send().await?).await
    }

    /// Sign in and return the signed token the backend issues.
    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let url = format!("{}/login", self.base);
        debug!("POST {url}");
        let response: LoginResponse =
            read_json(self.client.post(&url).json(credentials).send().await?).await?;
        Ok(response.token)
    }

    pub async fn save_charity(&self, charity: &SavedCharity) -> Result<()> {
        let url = format!("{}/search", self.base);
        debug!("POST {url}");
        ensure_success(self.client.post(&url).json(charity).send().await?).await
    }

    pub async fn saved_charities(&self) -> Result<Vec<SavedCharityRecord>> {
        let url = format!("{}/search", self.base);
        debug!("GET {url}");
        read_json(self.client.get(&url).send().await?).await
    }

    pub async fn delete_charity(&self, id: &str) -> Result<()> {
        let url = format!("{}/search/{id}", self.base);
        debug!("DELETE {url}");
        ensure_success(self.client.delete(&url).send().await?).await
    }
}

#[derive(Deserialize, Debug)]
struct CommentThread {
    comments: Vec<Comment>,
}

#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A directory search result kept on the backend for later.
#[derive(Serialize, Debug, Clone)]
pub struct SavedCharity {
    pub name: String,
    pub description: Option<String>,
    pub cause: Option<String>,
    pub imageurl: Option<String>,
    pub url: Option<String>,
}

impl From<&CharityOrg> for SavedCharity {
    fn from(org: &CharityOrg) -> Self {
        Self {
            name: org.charity_name.clone(),
            description: org.tag_line.clone(),
            cause: org.cause.as_ref().map(|cause| cause.cause_name.clone()),
            imageurl: org
                .current_rating
                .as_ref()
                .and_then(|rating| rating.rating_image.as_ref())
                .map(|image| image.large.clone()),
            url: org.website_url.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SavedCharityRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
