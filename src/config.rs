use std::time::Duration;

use crate::pacing::DelayRange;

pub const SEARCH_ENDPOINT: &str =
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";

// Mimic a real browser; the guest endpoints reject unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Results per listing page on the upstream API.
pub const PAGE_SIZE: u32 = 25;

pub const DEFAULT_MAX_PAGES: u32 = 2;

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub page_size: u32,
    pub max_pages: u32,
    pub request_timeout: Duration,
    pub listing_delay: DelayRange,
    pub detail_delay: DelayRange,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
            page_size: PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout: Duration::from_secs(30),
            listing_delay: DelayRange::new(2.0, 4.0),
            detail_delay: DelayRange::new(1.0, 3.0),
        }
    }
}

pub fn output_filename(keywords: &str) -> String {
    format!("linkedin_jobs_{}.xlsx", keywords.replace(' ', "_"))
}
