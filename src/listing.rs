use anyhow::{anyhow, Result};
use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::markup::{first, selector, trimmed_text};
use crate::models::{ListingFields, NOT_AVAILABLE};

/// Reads job cards off a search-results page.
pub struct ListingParser {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    time: Selector,
    link: Selector,
}

impl ListingParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: selector("div.base-search-card")?,
            title: selector("h3.base-search-card__title")?,
            company: selector("h4.base-search-card__subtitle")?,
            location: selector("span.job-search-card__location")?,
            time: selector("time")?,
            link: selector("a.base-card__full-link")?,
        })
    }

    /// One entry per usable card, in page order. Cards lacking a title,
    /// company or link are skipped; malformed cards are logged and skipped.
    pub fn parse(&self, html: &str) -> Vec<ListingFields> {
        let document = Html::parse_document(html);
        let mut jobs = Vec::new();

        for card in document.select(&self.card) {
            match self.extract_card(card) {
                Ok(Some(job)) => jobs.push(job),
                Ok(None) => {}
                Err(e) => {
                    warn!("Error parsing job card: {}", e);
                    continue;
                }
            }
        }

        jobs
    }

    fn extract_card(&self, card: ElementRef) -> Result<Option<ListingFields>> {
        let title = first(card, &self.title);
        let company = first(card, &self.company);
        let link = first(card, &self.link);

        let (Some(title), Some(company), Some(link)) = (title, company, link) else {
            return Ok(None);
        };

        let job_url = link
            .value()
            .attr("href")
            .ok_or_else(|| anyhow!("job link has no href"))?
            .trim()
            .to_string();

        let location = first(card, &self.location)
            .map(trimmed_text)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let date_posted = first(card, &self.time)
            .and_then(|time| time.value().attr("datetime"))
            .map(str::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Ok(Some(ListingFields {
            title: trimmed_text(title),
            company: trimmed_text(company),
            location,
            date_posted,
            job_url,
        }))
    }
}
