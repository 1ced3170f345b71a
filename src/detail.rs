use anyhow::Result;
use log::{debug, warn};
use scraper::{Html, Selector};

use crate::http::HttpClient;
use crate::markup::{first, selector, stripped_text};
use crate::models::{DetailFields, NOT_AVAILABLE, RECRUITER_MESSAGING};
use crate::pacing::{DelayRange, Pacer};

pub const DESCRIPTION_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    SeniorityLevel,
    EmploymentType,
    JobFunction,
    Industries,
}

/// Case-insensitive substring match on the criteria label, checked in a fixed order.
pub fn classify(label: &str) -> Option<Criterion> {
    let label = label.to_lowercase();
    if label.contains("seniority level") {
        Some(Criterion::SeniorityLevel)
    } else if label.contains("employment type") {
        Some(Criterion::EmploymentType)
    } else if label.contains("job function") {
        Some(Criterion::JobFunction)
    } else if label.contains("industries") {
        Some(Criterion::Industries)
    } else {
        None
    }
}

/// First 500 characters plus "...". The marker is appended even to short text.
pub fn truncate_description(text: &str) -> String {
    let mut truncated: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    truncated.push_str("...");
    truncated
}

struct DetailSelectors {
    description: Selector,
    criteria_item: Selector,
    criteria_label: Selector,
    criteria_value: Selector,
    recruiter: Selector,
}

pub struct DetailFetcher<'a> {
    client: &'a dyn HttpClient,
    pacer: &'a dyn Pacer,
    delay: DelayRange,
    selectors: DetailSelectors,
}

impl<'a> DetailFetcher<'a> {
    pub fn new(client: &'a dyn HttpClient, pacer: &'a dyn Pacer, delay: DelayRange) -> Result<Self> {
        let selectors = DetailSelectors {
            description: selector("div.description__text")?,
            criteria_item: selector("li.description__job-criteria-item")?,
            criteria_label: selector("h3.description__job-criteria-subheader")?,
            criteria_value: selector("span.description__job-criteria-text")?,
            recruiter: selector("a.message-the-recruiter")?,
        };
        Ok(Self {
            client,
            pacer,
            delay,
            selectors,
        })
    }

    /// Never fails: anything that goes wrong yields the all-"N/A" set.
    pub fn fetch(&self, job_url: &str) -> DetailFields {
        if job_url.is_empty() || job_url == NOT_AVAILABLE {
            return DetailFields::default();
        }

        let response = match self.client.get(job_url) {
            Ok(response) => response,
            Err(e) => {
                warn!("Error getting detailed info: {}", e);
                return DetailFields::default();
            }
        };

        if !response.is_success() {
            debug!("Detail page {} returned status {}", job_url, response.status);
            return DetailFields::default();
        }

        let detail = self.parse(&response.body);

        self.pacer.pause(self.delay);

        detail
    }

    pub fn parse(&self, html: &str) -> DetailFields {
        let document = Html::parse_document(html);
        let root = document.root_element();
        let mut detail = DetailFields::default();

        if let Some(description) = first(root, &self.selectors.description) {
            detail.description = truncate_description(&stripped_text(description));
        }

        for item in root.select(&self.selectors.criteria_item) {
            let label = first(item, &self.selectors.criteria_label);
            let value = first(item, &self.selectors.criteria_value);
            let (Some(label), Some(value)) = (label, value) else {
                continue;
            };

            let value = stripped_text(value);
            match classify(&stripped_text(label)) {
                Some(Criterion::SeniorityLevel) => detail.seniority_level = value,
                Some(Criterion::EmploymentType) => detail.employment_type = value,
                Some(Criterion::JobFunction) => detail.job_function = value,
                Some(Criterion::Industries) => detail.industries = value,
                None => {}
            }
        }

        if first(root, &self.selectors.recruiter).is_some() {
            detail.contact_info = RECRUITER_MESSAGING.to_string();
        }

        detail
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{criteria_item, detail_page};
    use super::*;
    use crate::http::testing::ScriptedClient;
    use crate::pacing::testing::RecordingPacer;
    use crate::pacing::NoDelay;

    const URL: &str = "https://de.linkedin.com/jobs/view/1";
    const DELAY: DelayRange = DelayRange::new(1.0, 3.0);

    #[test]
    fn test_classify_is_case_insensitive_substring() {
        assert_eq!(classify("Seniority level"), Some(Criterion::SeniorityLevel));
        assert_eq!(classify("EMPLOYMENT TYPE"), Some(Criterion::EmploymentType));
        assert_eq!(classify("Primary job function (EU)"), Some(Criterion::JobFunction));
        assert_eq!(classify("Industries"), Some(Criterion::Industries));
        assert_eq!(classify("Salary"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_truncate_appends_ellipsis_to_short_text() {
        assert_eq!(truncate_description("Short role."), "Short role....");
        assert_eq!(truncate_description(""), "...");
    }

    #[test]
    fn test_truncate_cuts_long_text_at_500_chars() {
        let exact = "a".repeat(500);
        assert_eq!(truncate_description(&exact), format!("{}...", exact));

        let long = "b".repeat(750);
        let truncated = truncate_description(&long);
        assert_eq!(truncated, format!("{}...", "b".repeat(500)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "ü".repeat(600);
        let truncated = truncate_description(&text);
        assert_eq!(truncated.chars().count(), 503);
    }

    #[test]
    fn test_empty_or_placeholder_url_makes_no_request_and_no_delay() {
        let client = ScriptedClient::new();
        let pacer = RecordingPacer::default();
        let fetcher = DetailFetcher::new(&client, &pacer, DELAY).unwrap();

        assert_eq!(fetcher.fetch(""), DetailFields::default());
        assert_eq!(fetcher.fetch("N/A"), DetailFields::default());
        assert!(client.requests().is_empty());
        assert!(pacer.pauses().is_empty());
    }

    #[test]
    fn test_fetch_full_detail_page() {
        let criteria = vec![
            criteria_item("Seniority level", "Mid-Senior level"),
            criteria_item("Employment type", "Full-time"),
            criteria_item("Job function", "Engineering and Information Technology"),
            criteria_item("Industries", "Software Development"),
        ];
        let body = detail_page("<p>Build pipelines.</p><p>Own the warehouse.</p>", &criteria, true);
        let client = ScriptedClient::new().route(URL, 200, &body);
        let pacer = RecordingPacer::default();
        let fetcher = DetailFetcher::new(&client, &pacer, DELAY).unwrap();

        let detail = fetcher.fetch(URL);

        assert_eq!(detail.description, "Build pipelines.Own the warehouse....");
        assert_eq!(detail.seniority_level, "Mid-Senior level");
        assert_eq!(detail.employment_type, "Full-time");
        assert_eq!(detail.job_function, "Engineering and Information Technology");
        assert_eq!(detail.industries, "Software Development");
        assert_eq!(detail.contact_info, "Recruiter messaging available");
        assert_eq!(client.requests(), vec![URL.to_string()]);
        assert_eq!(pacer.pauses(), vec![DELAY]);
    }

    #[test]
    fn test_unmatched_criteria_leave_fields_alone() {
        let criteria = vec![criteria_item("Salary range", "€80k"), criteria_item("Remote", "Yes")];
        let body = detail_page("Role", &criteria, false);
        let client = ScriptedClient::new().route(URL, 200, &body);
        let fetcher = DetailFetcher::new(&client, &NoDelay, DELAY).unwrap();

        let detail = fetcher.fetch(URL);

        assert_eq!(detail.description, "Role...");
        assert_eq!(detail.seniority_level, "N/A");
        assert_eq!(detail.employment_type, "N/A");
        assert_eq!(detail.job_function, "N/A");
        assert_eq!(detail.industries, "N/A");
        assert_eq!(detail.contact_info, "N/A");
    }

    #[test]
    fn test_repeated_criterion_last_one_wins() {
        let criteria = vec![
            criteria_item("Employment type", "Contract"),
            criteria_item("employment type", "Full-time"),
        ];
        let body = detail_page("Role", &criteria, false);
        let client = ScriptedClient::new().route(URL, 200, &body);
        let fetcher = DetailFetcher::new(&client, &NoDelay, DELAY).unwrap();

        assert_eq!(fetcher.fetch(URL).employment_type, "Full-time");
    }

    #[test]
    fn test_criteria_item_without_value_is_ignored() {
        let partial = r#"<li class="description__job-criteria-item">
            <h3 class="description__job-criteria-subheader">Seniority level</h3>
        </li>"#
            .to_string();
        let body = detail_page("Role", &[partial], false);
        let client = ScriptedClient::new();
        let fetcher = DetailFetcher::new(&client, &NoDelay, DELAY).unwrap();

        assert_eq!(fetcher.parse(&body).seniority_level, "N/A");
    }

    #[test]
    fn test_missing_description_stays_not_available() {
        let client = ScriptedClient::new().route(URL, 200, "<html><body><h1>Expired</h1></body></html>");
        let fetcher = DetailFetcher::new(&client, &NoDelay, DELAY).unwrap();

        assert_eq!(fetcher.fetch(URL), DetailFields::default());
    }

    #[test]
    fn test_bad_status_returns_defaults_without_delay() {
        let body = detail_page("Role", &[criteria_item("Industries", "Retail")], true);
        let client = ScriptedClient::new().route(URL, 404, &body);
        let pacer = RecordingPacer::default();
        let fetcher = DetailFetcher::new(&client, &pacer, DELAY).unwrap();

        assert_eq!(fetcher.fetch(URL), DetailFields::default());
        assert_eq!(client.requests().len(), 1);
        assert!(pacer.pauses().is_empty());
    }

    #[test]
    fn test_unreachable_url_returns_defaults() {
        let client = ScriptedClient::new();
        let pacer = RecordingPacer::default();
        let fetcher = DetailFetcher::new(&client, &pacer, DELAY).unwrap();

        assert_eq!(fetcher.fetch("https://unreachable.example/job"), DetailFields::default());
        assert_eq!(client.requests().len(), 1);
    }
}
