pub mod order;

pub use order::DonationOrder;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;

use crate::commands::Command;
use crate::error::{ClientError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "donate-cli",
    about = "A command-line client for the Donate crowdfunding platform",
    version
)]
pub struct Config {
    #[command(subcommand)]
    command: Command,

    /// Campaign backend base URL
    #[arg(
        long,
        env = "DONATE_API_URL",
        default_value = "https://donate-backend-alpha.vercel.app/api"
    )]
    api_url: String,

    /// Directory holding the session file
    #[arg(long, env = "DONATE_STATE_DIR", default_value = ".")]
    state_dir: PathBuf,

    /// Charity directory base URL
    #[arg(
        long,
        env = "CHARITY_API_URL",
        default_value = "https://api.data.charitynavigator.org/v2/Organizations"
    )]
    charity_url: String,

    /// Charity directory application id
    #[arg(long, env = "CHARITY_APP_ID")]
    charity_app_id: Option<String>,

    /// Charity directory application key
    #[arg(long, env = "CHARITY_APP_KEY")]
    charity_app_key: Option<String>,

    /// News API base URL
    #[arg(
        long,
        env = "NEWS_API_URL",
        default_value = "https://newsapi.org/v2/top-headlines"
    )]
    news_url: String,

    /// News API key
    #[arg(long, env = "NEWS_API_KEY")]
    news_api_key: Option<String>,

    /// Image host upload endpoint
    #[arg(
        long,
        env = "UPLOAD_URL",
        default_value = "https://api.cloudinary.com/v1_1/demo/image/upload"
    )]
    upload_url: String,

    /// Image host unsigned upload preset
    #[arg(long, env = "UPLOAD_PRESET", default_value = "ml_default")]
    upload_preset: String,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }

    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .init();
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn charity_url(&self) -> &str {
        &self.charity_url
    }

    /// Charity directory credentials, or a hint on how to configure them.
    pub fn charity_credentials(&self) -> Result<(&str, &str)> {
        match (&self.charity_app_id, &self.charity_app_key) {
            (Some(id), Some(key)) => Ok((id, key)),
            _ => Err(ClientError::Validation(
                "charity directory credentials are not configured \
                 (set CHARITY_APP_ID and CHARITY_APP_KEY)"
                    .to_string(),
            )),
        }
    }

    pub fn news_url(&self) -> &str {
        &self.news_url
    }

    pub fn news_api_key(&self) -> Result<&str> {
        self.news_api_key.as_deref().ok_or_else(|| {
            ClientError::Validation("news API key is not configured (set NEWS_API_KEY)".to_string())
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn upload_preset(&self) -> &str {
        &self.upload_preset
    }
}
