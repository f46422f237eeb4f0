use std::sync::Arc;

use rec_gov::{CampgroundApi, RecGovError};
use tracing::debug;
use validator::Validate;

use crate::types::Campground;

/// Entity kind kept by search filtering.
const CAMPGROUND_ENTITY: &str = "campground";

/// Keyword form input. The length rule matches the search form the
/// interface has always enforced.
#[derive(Debug, Validate)]
pub struct SearchKeywords {
    /// Free-text keywords, 3 to 50 characters.
    #[validate(length(
        min = 3,
        max = 50,
        message = "Keywords must be between 3 and 50 characters."
    ))]
    pub keywords: String,
}

/// Failures a keyword search can report.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Keywords failed validation; no request was made.
    #[error("{0}")]
    InvalidKeywords(String),

    /// Transport, status, or decode failure from the upstream call.
    #[error(transparent)]
    Api(#[from] RecGovError),

    /// The response carried no results collection at all.
    #[error("No matching campgrounds...")]
    NoMatches,
}

/// Keyword search narrowed to reservable campgrounds.
pub struct CampgroundSearcher {
    api: Arc<dyn CampgroundApi>,
}

impl CampgroundSearcher {
    /// Create a searcher over the given API.
    pub fn new(api: Arc<dyn CampgroundApi>) -> Self {
        Self { api }
    }

    /// Run one keyword search and keep only reservable entities of type
    /// `"campground"`, preserving upstream order.
    pub async fn search(&self, keywords: &str) -> Result<Vec<Campground>, SearchError> {
        let input = SearchKeywords {
            keywords: keywords.to_string(),
        };
        input.validate().map_err(|_| {
            SearchError::InvalidKeywords(
                "Keywords must be between 3 and 50 characters.".to_string(),
            )
        })?;

        let response = self.api.search(keywords).await?;
        let results = response.results.ok_or(SearchError::NoMatches)?;

        let campgrounds: Vec<Campground> = results
            .into_iter()
            .filter(|entry| entry.reservable && entry.entity_type == CAMPGROUND_ENTITY)
            .map(Campground::from)
            .collect();

        debug!(
            "Search '{}' yielded {} reservable campgrounds",
            keywords,
            campgrounds.len()
        );

        Ok(campgrounds)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rec_gov::{MonthAvailabilityResponse, SearchResponse};
    use serde_json::json;

    use super::*;

    /// Scripted API answering search requests with a fixed payload.
    struct ScriptedApi {
        payload: serde_json::Value,
    }

    #[async_trait]
    impl CampgroundApi for ScriptedApi {
        async fn search(&self, _keywords: &str) -> Result<SearchResponse, RecGovError> {
            serde_json::from_value(self.payload.clone())
                .map_err(|e| RecGovError::Decode(e.to_string()))
        }

        async fn month_availability(
            &self,
            _campground_id: &str,
            _month_start: NaiveDate,
        ) -> Result<MonthAvailabilityResponse, RecGovError> {
            Err(RecGovError::Status(501))
        }
    }

    /// API whose search always fails at transport level.
    struct FailingApi;

    #[async_trait]
    impl CampgroundApi for FailingApi {
        async fn search(&self, _keywords: &str) -> Result<SearchResponse, RecGovError> {
            Err(RecGovError::Request("connection reset".to_string()))
        }

        async fn month_availability(
            &self,
            _campground_id: &str,
            _month_start: NaiveDate,
        ) -> Result<MonthAvailabilityResponse, RecGovError> {
            Err(RecGovError::Status(501))
        }
    }

    fn searcher(payload: serde_json::Value) -> CampgroundSearcher {
        CampgroundSearcher::new(Arc::new(ScriptedApi { payload }))
    }

    #[tokio::test]
    async fn keeps_only_reservable_campgrounds() {
        let searcher = searcher(json!({
            "results": [
                {
                    "entity_id": "123",
                    "entity_type": "campground",
                    "name": "Upper Pines",
                    "reservable": true
                },
                {
                    "entity_id": "456",
                    "entity_type": "campground",
                    "name": "Closed Camp",
                    "reservable": false
                },
                {
                    "entity_id": "789",
                    "entity_type": "tour",
                    "name": "Cave Tour",
                    "reservable": true
                }
            ]
        }));

        let campgrounds = searcher.search("yosemite").await.unwrap();

        assert_eq!(campgrounds.len(), 1);
        assert_eq!(campgrounds[0].id, "123");
    }

    #[tokio::test]
    async fn missing_results_collection_is_no_matches() {
        let searcher = searcher(json!({ "size": 0 }));

        assert!(matches!(
            searcher.search("nowhere").await,
            Err(SearchError::NoMatches)
        ));
    }

    #[tokio::test]
    async fn empty_filtered_list_is_not_an_error() {
        let searcher = searcher(json!({
            "results": [
                { "entity_id": "789", "entity_type": "tour", "reservable": true }
            ]
        }));

        assert!(searcher.search("tours only").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn short_keywords_are_rejected_before_any_request() {
        let searcher = CampgroundSearcher::new(Arc::new(FailingApi));

        // A transport error would surface as SearchError::Api; validation
        // must win before the request happens.
        assert!(matches!(
            searcher.search("yo").await,
            Err(SearchError::InvalidKeywords(_))
        ));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_api_error() {
        let searcher = CampgroundSearcher::new(Arc::new(FailingApi));

        assert!(matches!(
            searcher.search("yosemite").await,
            Err(SearchError::Api(RecGovError::Request(_)))
        ));
    }
}
