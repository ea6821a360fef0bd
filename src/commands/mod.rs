mod account;
mod campaigns;
mod charity;
mod news;
mod review;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::{Config, DonationOrder};
use crate::error::Result;
use crate::session::SessionStore;

/// One subcommand per page of the platform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List campaigns with their funding progress
    Campaigns {
        /// Page to show, starting at 0
        #[arg(long, default_value = "0")]
        page: usize,
        /// Campaigns per page
        #[arg(long = "page-size", default_value = "10")]
        page_size: usize,
    },

    /// Show one campaign: progress, donations and comments
    Show {
        /// Campaign id
        id: String,
        /// Donation list order
        #[arg(short, long, default_value = "newest")]
        order: DonationOrder,
    },

    /// Start a fundraiser (requires a session; reviewed before listing)
    Create(CreateArgs),

    /// Donate to a campaign
    Donate {
        /// Campaign id
        id: String,
        /// Amount to donate
        #[arg(long)]
        amount: f64,
        /// Donor display name; defaults to the signed-in user, else Anonymous
        #[arg(long)]
        name: Option<String>,
    },

    /// Add a comment to a campaign (requires a session)
    Comment {
        /// Campaign id
        id: String,
        /// Comment text
        #[arg(long)]
        text: String,
    },

    /// List campaigns awaiting approval (administrators only)
    Review,

    /// Approve a pending campaign (administrators only)
    Approve {
        /// Campaign id
        id: String,
    },

    /// Reject a pending campaign (administrators only)
    Reject {
        /// Campaign id
        id: String,
    },

    /// Search the charity directory
    Search {
        /// Keyword to search for
        query: String,
        /// Save the result with this EIN to the backend
        #[arg(long)]
        save: Option<String>,
    },

    /// Charities saved from earlier searches
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Search news headlines
    News {
        /// Keyword to search for
        query: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved charities
    List,
    /// Remove a saved charity
    Remove {
        /// Saved charity id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Campaign title
    #[arg(long)]
    pub title: String,
    /// What the money is for
    #[arg(long)]
    pub description: String,
    /// Country of the fundraiser
    #[arg(long)]
    pub country: String,
    /// Postal code of the fundraiser
    #[arg(long = "zip-code")]
    pub zip_code: String,
    /// Who receives the funds
    #[arg(long)]
    pub recipient: String,
    /// Fundraising goal
    #[arg(long)]
    pub goal: f64,
    /// Local image to upload for the campaign page
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Accept the donor agreement terms
    #[arg(long)]
    pub agree: bool,
}

/// Dispatch the parsed command. Session-gated commands check the store
/// before any network call.
pub async fn run(config: &Config) -> Result<()> {
    let mut session = SessionStore::open(config.state_dir());

    match config.command() {
        Command::Campaigns { page, page_size } => {
            campaigns::list(config, *page, *page_size).await
        }
        Command::Show { id, order } => campaigns::show(config, id, *order).await,
        Command::Create(args) => campaigns::create(config, &session, args).await,
        Command::Donate { id, amount, name } => {
            campaigns::donate(config, &session, id, *amount, name.as_deref()).await
        }
        Command::Comment { id, text } => campaigns::comment(config, &session, id, text).await,
        Command::Review => review::queue(config, &session).await,
        Command::Approve { id } => review::approve(config, &session, id).await,
        Command::Reject { id } => review::reject(config, &session, id).await,
        Command::Search { query, save } => charity::search(config, query, save.as_deref()).await,
        Command::Saved(SavedCommand::List) => charity::saved(config).await,
        Command::Saved(SavedCommand::Remove { id }) => charity::remove(config, id).await,
        Command::News { query } => news::search(config, query).await,
        Command::Register {
            name,
            email,
            password,
        } => account::register(config, name, email, password).await,
        Command::Login { email, password } => {
            account::login(config, &mut session, email, password).await
        }
        Command::Logout => account::logout(&mut session),
        Command::Whoami => account::whoami(&session),
    }
}

/// Shorten a value to fit a table column.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Whole currency units in, display string out.
pub(crate) fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

/// Fixed-width progress bar. Non-finite percentages (no goal set) and
/// overfunded campaigns clamp to the bar bounds.
pub(crate) fn progress_bar(percent: f64, width: usize) -> String {
    let filled = if percent.is_finite() {
        ((percent / 100.0) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long campaign title", 10), "a very lo…");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(50.0), "$50");
        assert_eq!(money(12.5), "$12.50");
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(250.0, 10), "[##########]");
        assert_eq!(progress_bar(-5.0, 10), "[----------]");
        assert_eq!(progress_bar(f64::INFINITY, 10), "[----------]");
    }
}
