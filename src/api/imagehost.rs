use std::path::Path;

use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tokio::fs;

use super::read_json;
use crate::config::Config;
use crate::error::Result;

/// Client for the image-hosting upload endpoint. Uploads are unsigned and
/// scoped by the configured preset.
#[derive(Debug, Clone)]
pub struct ImageHostClient {
    client: Client,
    upload_url: String,
    preset: String,
}

impl ImageHostClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            upload_url: config.upload_url().to_string(),
            preset: config.upload_preset().to_string(),
        }
    }

    /// Upload a local file and return its hosted public URL.
    pub async fn upload(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.as_ref())?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.preset.clone());

        debug!("POST {}", self.upload_url);
        let upload: Upload =
            read_json(self.client.post(&self.upload_url).multipart(form).send().await?).await?;
        info!("Uploaded {} to {}", path.display(), upload.secure_url);
        Ok(upload.secure_url)
    }
}

#[derive(Deserialize, Debug)]
struct Upload {
    secure_url: String,
}
