use anyhow::{Context, Result};
use log::{error, info, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::detail::DetailFetcher;
use crate::http::HttpClient;
use crate::listing::ListingParser;
use crate::models::JobRecord;
use crate::pacing::Pacer;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keywords: String,
    pub location: String,
}

/// How pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every requested page was fetched and parsed.
    Completed { pages: u32 },
    /// Stopped early on the given 1-based page. No retries are made.
    Aborted { page: u32, reason: String },
}

#[derive(Debug)]
pub struct SearchRun {
    pub records: RecordStore,
    pub outcome: SearchOutcome,
}

enum PageResult {
    Parsed { found: usize },
    BadStatus(u16),
}

pub fn search_url(endpoint: &str, query: &SearchQuery, start: u32) -> Result<Url> {
    let start = start.to_string();
    Url::parse_with_params(
        endpoint,
        &[
            ("keywords", query.keywords.as_str()),
            ("location", query.location.as_str()),
            ("start", start.as_str()),
        ],
    )
    .with_context(|| format!("Invalid search endpoint: {}", endpoint))
}

/// Walks listing pages for one query, enriching every card with its detail page.
pub struct Searcher<'a> {
    client: &'a dyn HttpClient,
    pacer: &'a dyn Pacer,
    config: &'a ScrapeConfig,
    listing: ListingParser,
    detail: DetailFetcher<'a>,
}

impl<'a> Searcher<'a> {
    pub fn new(client: &'a dyn HttpClient, pacer: &'a dyn Pacer, config: &'a ScrapeConfig) -> Result<Self> {
        Ok(Self {
            client,
            pacer,
            config,
            listing: ListingParser::new()?,
            detail: DetailFetcher::new(client, pacer, config.detail_delay)?,
        })
    }

    pub fn run(&self, query: &SearchQuery) -> SearchRun {
        let mut records = RecordStore::new();

        for page in 0..self.config.max_pages {
            let page_number = page + 1;
            match self.scrape_page(query, page, &mut records) {
                Ok(PageResult::Parsed { found }) => {
                    info!("Page {} yielded {} job(s)", page_number, found);
                    self.pacer.pause(self.config.listing_delay);
                }
                Ok(PageResult::BadStatus(status)) => {
                    warn!("Failed to fetch page {} (status {})", page_number, status);
                    return SearchRun {
                        records,
                        outcome: SearchOutcome::Aborted {
                            page: page_number,
                            reason: format!("HTTP status {}", status),
                        },
                    };
                }
                Err(e) => {
                    error!("Error on page {}: {:#}", page_number, e);
                    return SearchRun {
                        records,
                        outcome: SearchOutcome::Aborted {
                            page: page_number,
                            reason: format!("{:#}", e),
                        },
                    };
                }
            }
        }

        SearchRun {
            records,
            outcome: SearchOutcome::Completed {
                pages: self.config.max_pages,
            },
        }
    }

    fn scrape_page(&self, query: &SearchQuery, page: u32, records: &mut RecordStore) -> Result<PageResult> {
        let url = search_url(&self.config.endpoint, query, page * self.config.page_size)?;
        info!("Scraping page {}...", page + 1);

        let response = self.client.get(url.as_str())?;
        if !response.is_success() {
            return Ok(PageResult::BadStatus(response.status));
        }

        let jobs = self.listing.parse(&response.body);
        let found = jobs.len();

        for listing in jobs {
            let detail = self.detail.fetch(&listing.job_url);
            let record = JobRecord::merge(listing, detail);
            info!("Found: {} at {}", record.title, record.company);
            records.push(record);
        }

        Ok(PageResult::Parsed { found })
    }
}
