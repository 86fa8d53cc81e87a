//! HR API client: the single point of entry for all calls to the remote HR
//! OData service.
//!
//! Handlers and services depend on the `HrApi` trait, never on reqwest
//! directly. `AppState` holds an `Arc<dyn HrApi>`; tests swap in a stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::errors::HrApiError;
use crate::records::RecordCategory;

pub mod filter;

pub use filter::ODataFilter;

const PHONE_ENTITY_SET: &str = "PerPhone";
const API_KEY_HEADER: &str = "APIKey";

/// Fixed upstream URLs, built once at startup from the configured base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub phone: String,
    pub personal: String,
    pub job: String,
    pub compensation: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let url = |entity_set: &str| format!("{base}/{entity_set}");
        Self {
            phone: url(PHONE_ENTITY_SET),
            personal: url(RecordCategory::Personal.entity_set()),
            job: url(RecordCategory::Job.entity_set()),
            compensation: url(RecordCategory::Compensation.entity_set()),
        }
    }

    pub fn record_url(&self, category: RecordCategory) -> &str {
        match category {
            RecordCategory::Personal => &self.personal,
            RecordCategory::Job => &self.job,
            RecordCategory::Compensation => &self.compensation,
        }
    }
}

/// Status and raw body of an upstream reply, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HrApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Authenticated read access to the HR API.
///
/// Implementations return non-2xx replies as `Ok`; `Err` means the exchange
/// itself failed.
#[async_trait]
pub trait HrApi: Send + Sync {
    async fn get(&self, url: &str, filter: &ODataFilter) -> Result<UpstreamResponse, HrApiError>;
}

/// reqwest-backed client using Basic auth plus the static API key header.
#[derive(Clone)]
pub struct HttpHrClient {
    client: Client,
    username: String,
    password: String,
    api_key: String,
}

impl HttpHrClient {
    pub fn new(config: &Config) -> Result<Self, HrApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.hr_api_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            username: config.hr_api_username.clone(),
            password: config.hr_api_password.clone(),
            api_key: config.hr_api_key.clone(),
        })
    }
}

#[async_trait]
impl HrApi for HttpHrClient {
    async fn get(&self, url: &str, filter: &ODataFilter) -> Result<UpstreamResponse, HrApiError> {
        let filter = filter.to_string();
        debug!(url, %filter, "HR API request");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("$filter", filter.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(url, status, bytes = body.len(), "HR API response");

        Ok(UpstreamResponse { status, body })
    }
}
