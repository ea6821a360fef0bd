use log::info;

use super::{money, truncate};
use crate::api::backend::BackendClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;

pub async fn queue(config: &Config, session: &SessionStore) -> Result<()> {
    session.require_admin()?;

    let pending = BackendClient::new(config).pending_campaigns().await?;
    info!("{} campaigns awaiting review", pending.len());

    if pending.is_empty() {
        println!("No campaigns awaiting review.");
        return Ok(());
    }

    println!(
        "{:<26}  {:<32}  {:<24}  {:>10}",
        "ID", "TITLE", "CREATOR", "GOAL"
    );
    for campaign in &pending {
        println!(
            "{:<26}  {:<32}  {:<24}  {:>10}",
            campaign.id,
            truncate(&campaign.title, 32),
            truncate(&campaign.created_username, 24),
            money(campaign.goal),
        );
    }
    println!();
    println!("Approve or reject with `donate-cli approve <id>` / `donate-cli reject <id>`.");
    Ok(())
}

pub async fn approve(config: &Config, session: &SessionStore, id: &str) -> Result<()> {
    session.require_admin()?;
    BackendClient::new(config).approve(id).await?;
    println!("Campaign {id} approved.");
    Ok(())
}

pub async fn reject(config: &Config, session: &SessionStore, id: &str) -> Result<()> {
    session.require_admin()?;
    BackendClient::new(config).reject(id).await?;
    println!("Campaign {id} rejected.");
    Ok(())
}
