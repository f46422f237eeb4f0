use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use crate::types::{MonthAvailabilityResponse, RecGovError, SearchResponse};

/// Public Rec.gov host used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.recreation.gov";

/// The two upstream operations the application needs. `RecGovClient` is the
/// real implementation; tests substitute scripted ones.
#[async_trait]
pub trait CampgroundApi: Send + Sync {
    /// Keyword search across reservable entities.
    async fn search(&self, keywords: &str) -> Result<SearchResponse, RecGovError>;

    /// Per-site availability for one campground and one calendar month.
    async fn month_availability(
        &self,
        campground_id: &str,
        month_start: NaiveDate,
    ) -> Result<MonthAvailabilityResponse, RecGovError>;
}

/// Client for the Rec.gov search and monthly availability endpoints.
pub struct RecGovClient {
    client: Client,
    base_url: String,
}

impl RecGovClient {
    /// Create a new Rec.gov API client. `base_url` overrides the public
    /// host, mainly for tests.
    pub fn new(base_url: Option<String>) -> Result<Self, RecGovError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecGovError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), RecGovError> {
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            429 => Err(RecGovError::RateLimited),
            code => Err(RecGovError::Status(code)),
        }
    }
}

#[async_trait]
impl CampgroundApi for RecGovClient {
    async fn search(&self, keywords: &str) -> Result<SearchResponse, RecGovError> {
        debug!("Searching Rec.gov with keywords: {}", keywords);

        let url = format!(
            "{}/api/search?exact=false&size=30&q={}",
            self.base_url,
            urlencoding::encode(keywords)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RecGovError::Request(format!("Search request failed: {}", e)))?;

        Self::check_status(response.status())?;

        response
            .json()
            .await
            .map_err(|e| RecGovError::Decode(format!("Failed to parse search response: {}", e)))
    }

    async fn month_availability(
        &self,
        campground_id: &str,
        month_start: NaiveDate,
    ) -> Result<MonthAvailabilityResponse, RecGovError> {
        debug!(
            "Fetching availability for campground {} starting {}",
            campground_id, month_start
        );

        let url = format!(
            "{}/api/camps/availability/campground/{}/month",
            self.base_url, campground_id
        );

        let params = vec![("start_date", month_start_param(month_start))];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| RecGovError::Request(format!("Availability request failed: {}", e)))?;

        Self::check_status(response.status())?;

        response.json().await.map_err(|e| {
            RecGovError::Decode(format!("Failed to parse availability response: {}", e))
        })
    }
}

/// The `start_date` value the availability endpoint expects: midnight UTC on
/// the first of the month, millisecond precision.
fn month_start_param(month_start: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", month_start.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_start_param_matches_endpoint_format() {
        let month = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(month_start_param(month), "2024-07-01T00:00:00.000Z");
    }

    #[test]
    fn rate_limit_status_maps_to_dedicated_error() {
        assert!(matches!(
            RecGovClient::check_status(reqwest::StatusCode::TOO_MANY_REQUESTS),
            Err(RecGovError::RateLimited)
        ));
        assert!(matches!(
            RecGovClient::check_status(reqwest::StatusCode::NOT_FOUND),
            Err(RecGovError::Status(404))
        ));
        assert!(RecGovClient::check_status(reqwest::StatusCode::OK).is_ok());
    }
}
