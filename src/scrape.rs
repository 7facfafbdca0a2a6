use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{info, warn};

use crate::output::{self, Spell};
use crate::parser;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}

/// Scrape every named spell in order, writing each one to `out_dir` as it
/// lands. Fetch and extraction failures are logged and skipped; the run
/// always continues to the next spell. Sleeps `delay` between consecutive
/// requests (never after the last) as rate-limiting etiquette.
pub async fn scrape_spells(
    client: &Client,
    base_url: &str,
    names: &[String],
    out_dir: &Path,
    delay: Duration,
) -> Result<Vec<Spell>> {
    let pb = ProgressBar::new(names.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} (eta {eta})")?
            .progress_chars("=> "),
    );

    let mut scraped = Vec::new();

    for (i, name) in names.iter().enumerate() {
        match scrape_spell(client, base_url, name).await {
            Ok(spell) => {
                output::write_spell(out_dir, name, &spell)?;
                scraped.push(spell);
            }
            Err(e) => warn!("Skipping {}: {}", name, e),
        }
        pb.inc(1);

        if i + 1 < names.len() {
            tokio::time::sleep(delay).await;
        }
    }

    pb.finish_and_clear();
    Ok(scraped)
}

/// Fetch one spell page and extract its record. Single attempt, no retry.
pub async fn scrape_spell(client: &Client, base_url: &str, name: &str) -> Result<Spell> {
    let url = format!("{}/spell:{}", base_url, name);
    info!("Scraping: {}", name);

    let html = fetch_page(client, &url)
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let spell = parser::extract_spell(&html, name, &url)?;
    Ok(spell)
}

async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
