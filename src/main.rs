mod config;
mod detail;
mod http;
mod listing;
mod logger;
mod markup;
mod models;
mod pacing;
mod report;
mod search;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use config::ScrapeConfig;
use http::BrowserClient;
use log::{info, warn};
use pacing::{FixedDelay, NoDelay, Pacer, UniformDelay};
use report::Summary;
use search::{SearchOutcome, SearchQuery, Searcher};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "jobscrape")]
#[command(about = "Scrape LinkedIn job search results into a spreadsheet")]
struct Cli {
    /// Job keywords (prompted for when omitted)
    #[arg(short, long)]
    keywords: Option<String>,

    /// Location filter; prompted for only when keywords are prompted too
    #[arg(short, long)]
    location: Option<String>,

    /// Number of result pages to fetch
    #[arg(short, long, default_value_t = config::DEFAULT_MAX_PAGES)]
    max_pages: u32,

    /// Output file (defaults to linkedin_jobs_<keywords>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not pause between requests
    #[arg(long, conflicts_with = "fixed_delay")]
    no_delay: bool,

    /// Pause a fixed number of seconds between requests instead of a random one
    #[arg(long, value_name = "SECS")]
    fixed_delay: Option<f64>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let (keywords, location) = match &cli.keywords {
        Some(keywords) => (
            keywords.trim().to_string(),
            cli.location.as_deref().unwrap_or("").trim().to_string(),
        ),
        None => (
            prompt("Enter job keywords (e.g., 'Python Developer'): ")?,
            prompt("Enter location (press enter for any): ")?,
        ),
    };

    let Some(query) = build_query(keywords, location) else {
        println!("Keywords are required!");
        return Ok(());
    };

    if let Err(e) = run(&cli, &query) {
        println!("An error occurred: {:#}", e);
    }

    println!("\nScraping completed!");
    Ok(())
}

fn run(cli: &Cli, query: &SearchQuery) -> Result<()> {
    let config = ScrapeConfig {
        max_pages: cli.max_pages,
        ..ScrapeConfig::default()
    };

    let pacer: Box<dyn Pacer> = match (cli.no_delay, cli.fixed_delay) {
        (true, _) => Box::new(NoDelay),
        (false, Some(secs)) => Box::new(FixedDelay(
            Duration::try_from_secs_f64(secs).context("Invalid --fixed-delay value")?,
        )),
        (false, None) => Box::new(UniformDelay),
    };

    let client = BrowserClient::new(&config.user_agent, config.request_timeout)?;
    let searcher = Searcher::new(&client, pacer.as_ref(), &config)?;

    info!(
        "Searching '{}' in '{}' ({} page(s))",
        query.keywords,
        if query.location.is_empty() { "any location" } else { query.location.as_str() },
        config.max_pages
    );
    let run = searcher.run(query);

    match &run.outcome {
        SearchOutcome::Completed { pages } => info!("Finished after {} page(s)", pages),
        SearchOutcome::Aborted { page, reason } => warn!("Stopped early on page {}: {}", page, reason),
    }

    print!("{}", Summary::from_store(&run.records));

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::output_filename(&query.keywords)));

    if run.records.is_empty() {
        println!("No data to save!");
        return Ok(());
    }

    match report::export_xlsx(&run.records, &output) {
        Ok(()) => {
            println!("Data saved to {}", output.display());
            println!("Total jobs collected: {}", run.records.len());
        }
        Err(e) => println!("Failed to save {}: {:#}", output.display(), e),
    }

    Ok(())
}

/// None when the keywords are blank; nothing is fetched or written in that case.
fn build_query(keywords: String, location: String) -> Option<SearchQuery> {
    if keywords.trim().is_empty() {
        return None;
    }
    Some(SearchQuery {
        keywords: keywords.trim().to_string(),
        location: location.trim().to_string(),
    })
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
