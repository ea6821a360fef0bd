use log::info;

use super::truncate;
use crate::api::backend::{BackendClient, SavedCharity};
use crate::api::charity::CharityClient;
use crate::config::Config;
use crate::error::{ClientError, Result};

pub async fn search(config: &Config, query: &str, save: Option<&str>) -> Result<()> {
    let results = CharityClient::new(config)?.search(query).await?;
    info!("{} organisations for \"{query}\"", results.len());

    if results.is_empty() {
        println!("No rated organisations match \"{query}\".");
        return Ok(());
    }

    println!(
        "{:<12}  {:<40}  {:<22}  {:>6}  {}",
        "EIN", "NAME", "CAUSE", "STARS", "WEBSITE"
    );
    for org in &results {
        let cause = org
            .cause
            .as_ref()
            .map(|cause| cause.cause_name.as_str())
            .unwrap_or("-");
        let stars = org
            .current_rating
            .as_ref()
            .and_then(|rating| rating.rating)
            .map(|stars| stars.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12}  {:<40}  {:<22}  {:>6}  {}",
            org.ein,
            truncate(&org.charity_name, 40),
            truncate(cause, 22),
            stars,
            org.website_url.as_deref().unwrap_or("-"),
        );
    }

    if let Some(ein) = save {
        let org = results
            .iter()
            .find(|org| org.ein == ein)
            .ok_or_else(|| ClientError::Validation(format!("no search result with EIN {ein}")))?;
        BackendClient::new(config)
            .save_charity(&SavedCharity::from(org))
            .await?;
        println!();
        println!("Saved {}.", org.charity_name);
    }
    Ok(())
}

pub async fn saved(config: &Config) -> Result<()> {
    let charities = BackendClient::new(config).saved_charities().await?;
    if charities.is_empty() {
        println!("No saved charities.");
        return Ok(());
    }

    println!("{:<26}  {:<40}  {:<22}  {}", "ID", "NAME", "CAUSE", "WEBSITE");
    for charity in &charities {
        println!(
            "{:<26}  {:<40}  {:<22}  {}",
            charity.id,
            truncate(&charity.name, 40),
            truncate(charity.cause.as_deref().unwrap_or("-"), 22),
            charity.url.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

pub async fn remove(config: &Config, id: &str) -> Result<()> {
    BackendClient::new(config).delete_charity(id).await?;
    println!("Removed saved charity {id}.");
    Ok(())
}
