use futures::future::try_join;
use log::info;

use super::{money, progress_bar, truncate, CreateArgs};
use crate::api::backend::BackendClient;
use crate::api::imagehost::ImageHostClient;
use crate::campaign::{Campaign, CampaignStatus, Comment, NewCampaign, NewComment, NewDonation};
use crate::config::{Config, DonationOrder};
use crate::error::{ClientError, Result};
use crate::session::SessionStore;
use crate::stats;

pub async fn list(config: &Config, page: usize, page_size: usize) -> Result<()> {
    let campaigns = BackendClient::new(config).all_campaigns().await?;
    info!("{} campaigns", campaigns.len());

    let visible = stats::paginate(&campaigns, page_size, page);
    if visible.is_empty() {
        println!("No campaigns on page {page}.");
        return Ok(());
    }

    println!(
        "{:<26}  {:<32}  {:<8}  {:>10}  {:>10}  {:>7}",
        "ID", "TITLE", "STATUS", "RAISED", "GOAL", "FUNDED"
    );
    for campaign in visible {
        let percent = stats::funding_percent(campaign.amount_raised, campaign.goal);
        println!(
            "{:<26}  {:<32}  {:<8}  {:>10}  {:>10}  {:>7}",
            campaign.id,
            truncate(&campaign.title, 32),
            campaign.status.to_string(),
            money(campaign.amount_raised),
            money(campaign.goal),
            stats::display_percent(percent),
        );
    }

    let pages = campaigns.len().div_ceil(page_size.max(1)).max(1);
    println!();
    println!("Page {} of {pages}", page + 1);
    Ok(())
}

pub async fn show(config: &Config, id: &str, order: DonationOrder) -> Result<()> {
    let backend = BackendClient::new(config);
    let (campaigns, comments) = try_join(backend.all_campaigns(), backend.comments(id)).await?;

    // The backend has no fetch-by-id, so filter the full listing.
    let campaign = campaigns
        .into_iter()
        .find(|campaign| campaign.id == id)
        .ok_or_else(|| ClientError::Validation(format!("no campaign with id {id}")))?;

    render_detail(&campaign, order);
    render_comments(&comments);
    Ok(())
}

fn render_detail(campaign: &Campaign, order: DonationOrder) {
    println!();
    println!("=== {} ===", campaign.title);
    println!(
        "Started by {} <{}> for {} ({}, {})",
        campaign.created_username,
        campaign.created_user_email,
        campaign.recipient,
        campaign.country,
        campaign.zip_code,
    );
    if campaign.status != CampaignStatus::Approved {
        println!("Status: {}", campaign.status);
    }
    println!();
    println!("{}", campaign.description);
    if let Some(image) = &campaign.image {
        println!("Image: {image}");
    }
    println!();

    let percent = stats::funding_percent(campaign.amount_raised, campaign.goal);
    println!(
        "{} {} raised of {} goal ({})",
        progress_bar(percent, 30),
        money(campaign.amount_raised),
        money(campaign.goal),
        stats::display_percent(percent),
    );

    match stats::top_donor(&campaign.donations) {
        Some(top) => println!("Top donor: {} ({})", top.donor_name, money(top.amount)),
        None => println!("No donations yet."),
    }

    if !campaign.donations.is_empty() {
        println!();
        println!("{} donations, {order} first:", campaign.donations.len());
        for donation in stats::sorted_donations(&campaign.donations, order) {
            println!(
                "  {}  {:>10}  {}",
                donation.date.format("%Y-%m-%d %H:%M"),
                money(donation.amount),
                donation.donor_name,
            );
        }
    }
}

fn render_comments(comments: &[Comment]) {
    println!();
    println!("Words of support:");
    if comments.is_empty() {
        println!("  No comments yet.");
        return;
    }
    for comment in comments {
        println!(
            "  {}  {}: {}",
            comment.created_on.format("%Y-%m-%d %H:%M"),
            comment.name,
            comment.comment,
        );
    }
}

pub async fn create(config: &Config, session: &SessionStore, args: &CreateArgs) -> Result<()> {
    let claims = session.require_user()?;

    let mut campaign = NewCampaign {
        title: args.title.clone(),
        description: args.description.clone(),
        country: args.country.clone(),
        zip_code: args.zip_code.clone(),
        recipient: args.recipient.clone(),
        goal: args.goal,
        status: CampaignStatus::Pending,
        created_username: claims.name.clone(),
        created_user_email: claims.email.clone(),
        image: None,
        agreement_accepted: args.agree,
    };
    campaign.validate()?;

    if let Some(path) = &args.image {
        campaign.image = Some(ImageHostClient::new(config).upload(path).await?);
    }

    let created = BackendClient::new(config).create_campaign(&campaign).await?;
    println!(
        "Campaign \"{}\" submitted for review (id {}).",
        created.title, created.id
    );
    println!("It will appear in listings once an administrator approves it.");
    Ok(())
}

pub async fn donate(
    config: &Config,
    session: &SessionStore,
    id: &str,
    amount: f64,
    name: Option<&str>,
) -> Result<()> {
    let donor_name = name
        .map(str::to_string)
        .or_else(|| session.current_user().map(|claims| claims.name.clone()))
        .unwrap_or_else(|| "Anonymous".to_string());

    let donation = NewDonation { donor_name, amount };
    donation.validate()?;

    BackendClient::new(config).donate(id, &donation).await?;
    println!(
        "Thank you, {}: {} donated to campaign {id}.",
        donation.donor_name,
        money(amount)
    );
    Ok(())
}

pub async fn comment(config: &Config, session: &SessionStore, id: &str, text: &str) -> Result<()> {
    let claims = session.require_user()?;
    if text.trim().is_empty() {
        return Err(ClientError::Validation(
            "comment text must not be empty".to_string(),
        ));
    }

    let comment = NewComment {
        name: claims.name.clone(),
        comment: text.to_string(),
    };
    BackendClient::new(config).add_comment(id, &comment).await?;
    println!("Comment added.");
    Ok(())
}
