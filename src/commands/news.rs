use log::info;

use crate::api::news::NewsClient;
use crate::config::Config;
use crate::error::Result;

pub async fn search(config: &Config, query: &str) -> Result<()> {
    let articles = NewsClient::new(config)?.top_headlines(query).await?;
    info!("{} headlines for \"{query}\"", articles.len());

    if articles.is_empty() {
        println!("No headlines for \"{query}\".");
        return Ok(());
    }

    for article in &articles {
        println!("* {}", article.title.as_deref().unwrap_or("(untitled)"));
        let source = article
            .source
            .as_ref()
            .and_then(|source| source.name.as_deref());
        match (source, article.published_at) {
            (Some(source), Some(date)) => println!("  {source}, {}", date.format("%Y-%m-%d")),
            (Some(source), None) => println!("  {source}"),
            (None, Some(date)) => println!("  {}", date.format("%Y-%m-%d")),
            (None, None) => {}
        }
        if let Some(description) = &article.description {
            println!("  {description}");
        }
        println!("  {}", article.url);
        println!();
    }
    Ok(())
}
