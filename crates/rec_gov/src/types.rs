use std::collections::HashMap;

use serde::Deserialize;

/// Response structure from the Rec.gov keyword search endpoint.
///
/// A search that matched nothing comes back without a `results` field at
/// all, which callers must treat as "no matches" rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matching entities, in upstream relevance order. Absent when the
    /// search found nothing.
    pub results: Option<Vec<SearchResult>>,
}

/// One entity from the search endpoint.
///
/// Search payloads mix campgrounds with tours, permits and other entity
/// kinds, and fields come and go between them, so everything defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Rec.gov entity identifier.
    #[serde(default)]
    pub entity_id: String,

    /// Entity kind, e.g. `"campground"` or `"tour"`.
    #[serde(default)]
    pub entity_type: String,

    /// Display name of the entity.
    #[serde(default)]
    pub name: String,

    /// Name of the enclosing park or forest.
    #[serde(default)]
    pub parent_name: String,

    /// Nearest city.
    #[serde(default)]
    pub city: String,

    /// Two-letter state code.
    #[serde(default)]
    pub state_code: String,

    /// Number of campsites, as the API reports it (a string).
    #[serde(default)]
    pub campsites_count: String,

    /// Whether the entity can be reserved through Rec.gov.
    #[serde(default)]
    pub reservable: bool,
}

/// Response structure from the Rec.gov monthly availability endpoint.
#[derive(Debug, Deserialize)]
pub struct MonthAvailabilityResponse {
    /// Per-site records, keyed by campsite id.
    pub campsites: HashMap<String, CampsiteMonth>,
}

/// One campsite's record for the requested month.
#[derive(Debug, Clone, Deserialize)]
pub struct CampsiteMonth {
    /// Map from ISO date string (`2024-07-01T00:00:00Z`) to a status
    /// string; the literal `"Available"` marks an open date.
    #[serde(default)]
    pub availabilities: HashMap<String, String>,

    /// Campsite id, normally identical to the map key.
    pub campsite_id: Option<String>,

    /// Short site label shown to campers, e.g. `"A012"`.
    pub site: Option<String>,

    /// Loop the site belongs to.
    #[serde(rename = "loop")]
    pub loop_name: Option<String>,

    /// Site type, e.g. `"STANDARD NONELECTRIC"`.
    pub campsite_type: Option<String>,
}

/// Errors from the Rec.gov client.
#[derive(Debug, thiserror::Error)]
pub enum RecGovError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Transport-level failure: connect, timeout, TLS.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// Rate limited by Rec.gov.
    #[error("Rate limited by Rec.gov")]
    RateLimited,

    /// The body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
