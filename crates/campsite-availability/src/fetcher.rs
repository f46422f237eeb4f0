use std::sync::Arc;

use chrono::NaiveDate;
use rec_gov::{CampgroundApi, CampsiteMonth, RecGovError};
use tracing::{debug, warn};

use crate::cache::SessionCache;
use crate::date_ranges::{collapse_runs, compact_label, day_label};
use crate::types::{MonthKey, SiteAvailability};

/// The one status string that marks an open date.
const AVAILABLE: &str = "Available";

/// Fetches a month of per-site availability for a campground and reduces it
/// to contiguous-range summaries, caching results per campground-month so a
/// revisited month costs no network call.
pub struct AvailabilityFetcher {
    api: Arc<dyn CampgroundApi>,
    cache: SessionCache,
}

impl AvailabilityFetcher {
    /// Create a fetcher with an empty session cache.
    pub fn new(api: Arc<dyn CampgroundApi>) -> Self {
        Self {
            api,
            cache: SessionCache::new(),
        }
    }

    /// Site summaries for one campground-month.
    ///
    /// Served from cache when the month was fetched before, including
    /// months that turned out empty. On a miss, issues exactly one request;
    /// any transport or decode failure propagates without touching the
    /// cache, so previously computed months stay served.
    ///
    /// Results are sorted by the comma-joined day list. That order is
    /// lexicographic, not chronological when sites differ in day count; it
    /// matches the ordering the interface has always shown.
    pub async fn site_availability(
        &mut self,
        campground_id: &str,
        month_start: NaiveDate,
    ) -> Result<Vec<SiteAvailability>, RecGovError> {
        let key = MonthKey::new(campground_id, month_start);

        if let Some(sites) = self.cache.get(&key) {
            debug!(
                "Cache hit for campground {} month {}",
                campground_id, month_start
            );
            return Ok(sites.to_vec());
        }

        let response = self
            .api
            .month_availability(campground_id, month_start)
            .await?;

        let mut sites: Vec<SiteAvailability> = response
            .campsites
            .iter()
            .filter_map(|(site_id, site)| summarize_site(site_id, site))
            .collect();
        sites.sort_by(|a, b| a.joined_days().cmp(&b.joined_days()));

        debug!(
            "Campground {} month {}: {} of {} sites have availability",
            campground_id,
            month_start,
            sites.len(),
            response.campsites.len()
        );

        self.cache.insert(key, sites.clone());
        Ok(sites)
    }

    /// Number of campground-months cached so far.
    pub fn cached_months(&self) -> usize {
        self.cache.len()
    }
}

/// Reduce one site's raw availability map to a summary. `None` when the
/// site has no `"Available"` dates, in which case the site is dropped.
fn summarize_site(site_id: &str, site: &CampsiteMonth) -> Option<SiteAvailability> {
    let mut days: Vec<NaiveDate> = site
        .availabilities
        .iter()
        .filter(|(_, status)| status.as_str() == AVAILABLE)
        .filter_map(|(date_str, _)| {
            let parsed = date_str
                .get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
            if parsed.is_none() {
                warn!("Failed to parse date: {}", date_str);
            }
            parsed
        })
        .collect();

    // The map iterates in hash order; sorting restores calendar order.
    days.sort_unstable();

    if days.is_empty() {
        return None;
    }

    let runs = collapse_runs(&days);

    Some(SiteAvailability {
        site_id: site
            .campsite_id
            .clone()
            .unwrap_or_else(|| site_id.to_string()),
        site_label: site.site.clone().unwrap_or_else(|| site_id.to_string()),
        loop_name: site.loop_name.clone().unwrap_or_default(),
        campsite_type: site.campsite_type.clone().unwrap_or_default(),
        available_days: days.iter().map(|&d| day_label(d)).collect(),
        range_labels: runs.iter().map(|run| compact_label(run)).collect(),
    })
}
