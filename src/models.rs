pub const NOT_AVAILABLE: &str = "N/A";
pub const RECRUITER_MESSAGING: &str = "Recruiter messaging available";

/// Column order of the exported sheet, one per `JobRecord` field.
pub const COLUMNS: [&str; 11] = [
    "title",
    "company",
    "location",
    "date_posted",
    "job_url",
    "description",
    "seniority_level",
    "employment_type",
    "job_function",
    "industries",
    "contact_info",
];

/// Fields read off a single job card on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_posted: String,
    pub job_url: String,
}

/// Fields read off a job's detail page. Every field is "N/A" until proven otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub description: String,
    pub seniority_level: String,
    pub employment_type: String,
    pub job_function: String,
    pub industries: String,
    pub contact_info: String, // RECRUITER_MESSAGING or "N/A"
}

impl Default for DetailFields {
    fn default() -> Self {
        Self {
            description: NOT_AVAILABLE.to_string(),
            seniority_level: NOT_AVAILABLE.to_string(),
            employment_type: NOT_AVAILABLE.to_string(),
            job_function: NOT_AVAILABLE.to_string(),
            industries: NOT_AVAILABLE.to_string(),
            contact_info: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_posted: String,
    pub job_url: String,
    pub description: String,
    pub seniority_level: String,
    pub employment_type: String,
    pub job_function: String,
    pub industries: String,
    pub contact_info: String,
}

impl JobRecord {
    pub fn merge(listing: ListingFields, detail: DetailFields) -> Self {
        Self {
            title: listing.title,
            company: listing.company,
            location: listing.location,
            date_posted: listing.date_posted,
            job_url: listing.job_url,
            description: detail.description,
            seniority_level: detail.seniority_level,
            employment_type: detail.employment_type,
            job_function: detail.job_function,
            industries: detail.industries,
            contact_info: detail.contact_info,
        }
    }

    /// Cell values in `COLUMNS` order.
    pub fn values(&self) -> [&str; 11] {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.date_posted,
            &self.job_url,
            &self.description,
            &self.seniority_level,
            &self.employment_type,
            &self.job_function,
            &self.industries,
            &self.contact_info,
        ]
    }
}
