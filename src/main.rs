mod output;
mod parser;
mod scrape;
mod spells;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use spells::SpellList;

#[derive(Parser)]
#[command(name = "spell_scraper", about = "D&D 5e spell scraper for dnd5e.wikidot.com")]
struct Cli {
    /// Path to a JSON file mapping class names to lists of spell page names
    spell_list: PathBuf,

    /// Base URL of the wiki
    #[arg(long, default_value = "https://dnd5e.wikidot.com")]
    base_url: String,

    /// Seconds to wait between requests (rate limiting)
    #[arg(long, default_value_t = 1.5)]
    delay: f64,

    /// Directory for per-spell markdown files
    #[arg(short, long, default_value = "scraped_spells")]
    out_dir: PathBuf,

    /// Path for the combined markdown file
    #[arg(long, default_value = "all_spells.md")]
    combined: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let list = SpellList::load(&cli.spell_list)?;
    let names = list.flatten();

    println!("Starting spell scraping...");
    println!("Scraping {} spells:", names.len());
    for (class, count) in list.group_sizes() {
        println!("  {} spell(s) from the {} class", count, class);
    }

    let client = scrape::client()?;
    let scraped = scrape::scrape_spells(
        &client,
        &cli.base_url,
        &names,
        &cli.out_dir,
        Duration::from_secs_f64(cli.delay),
    )
    .await?;

    if scraped.is_empty() {
        println!("No spells were successfully scraped");
        return Ok(());
    }

    output::write_combined(&cli.combined, &scraped)?;
    println!(
        "\nSuccessfully scraped {} out of {} spells",
        scraped.len(),
        names.len()
    );

    Ok(())
}
