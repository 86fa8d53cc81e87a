//! Record Fetcher: one generic fetch for every record category.
//!
//! The category table is closed: `RecordCategory::ALL` is the only source
//! of routes, titles and entity sets.

use serde_json::Value;
use tracing::{info, warn};

use crate::hr_client::{Endpoints, HrApi, ODataFilter};
use crate::models::employee::{RecordQuery, RecordResult};

const PERSON_ID_FIELD: &str = "personIdExternal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCategory {
    Personal,
    Job,
    Compensation,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 3] = [
        RecordCategory::Personal,
        RecordCategory::Job,
        RecordCategory::Compensation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            RecordCategory::Personal => "Personal Information",
            RecordCategory::Job => "Job Information",
            RecordCategory::Compensation => "Compensation Information",
        }
    }

    /// First path segment of the category's page.
    pub fn slug(self) -> &'static str {
        match self {
            RecordCategory::Personal => "personal",
            RecordCategory::Job => "job",
            RecordCategory::Compensation => "comp",
        }
    }

    /// OData entity set holding this category's records.
    pub fn entity_set(self) -> &'static str {
        match self {
            RecordCategory::Personal => "PerPersonal",
            RecordCategory::Job => "EmpJob",
            RecordCategory::Compensation => "Compensation",
        }
    }
}

/// Fetches `query.category` for `query.person_id_external` via the fixed table.
pub async fn fetch_record(
    hr: &dyn HrApi,
    endpoints: &Endpoints,
    query: &RecordQuery,
) -> RecordResult {
    fetch_info(
        hr,
        endpoints.record_url(query.category),
        query.category.title(),
        &query.person_id_external,
    )
    .await
}

/// Reads `url` filtered by external person id.
/// Anything other than a decodable 200 reply becomes `RecordResult::Failed`.
pub async fn fetch_info(
    hr: &dyn HrApi,
    url: &str,
    title: &'static str,
    person_id: &str,
) -> RecordResult {
    let filter = ODataFilter::eq(PERSON_ID_FIELD, person_id);

    let response = match hr.get(url, &filter).await {
        Ok(response) => response,
        Err(e) => {
            warn!(url, error = %e, "Record fetch failed");
            return RecordResult::Failed { title };
        }
    };

    if !response.is_ok() {
        warn!(url, status = response.status, "Record fetch returned non-200");
        return RecordResult::Failed { title };
    }

    match response.json::<Value>() {
        Ok(payload) => {
            info!(url, "Record fetched");
            RecordResult::Fetched { title, payload }
        }
        Err(e) => {
            warn!(url, error = %e, "Record payload is not JSON");
            RecordResult::Failed { title }
        }
    }
}
