use chrono::NaiveDate;
use rec_gov::SearchResult;
use serde::Serialize;

/// A reservable campground taken from a keyword search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campground {
    /// Rec.gov entity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Enclosing park or forest.
    pub parent_name: String,
    /// Nearest city.
    pub city: String,
    /// Two-letter state code.
    pub state_code: String,
    /// Number of campsites, as reported upstream.
    pub site_count: String,
    /// Always true after search filtering; kept for completeness.
    pub reservable: bool,
    /// Entity kind, `"campground"` after search filtering.
    pub entity_type: String,
}

impl From<SearchResult> for Campground {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.entity_id,
            name: result.name,
            parent_name: result.parent_name,
            city: result.city,
            state_code: result.state_code,
            site_count: result.campsites_count,
            reservable: result.reservable,
            entity_type: result.entity_type,
        }
    }
}

/// Cache key identifying one campground's availability for one calendar
/// month. `month_start` is always the first of the month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthKey {
    /// Campground entity id.
    pub campground_id: String,
    /// First day of the month.
    pub month_start: NaiveDate,
}

impl MonthKey {
    /// Build a key for one campground-month.
    pub fn new(campground_id: impl Into<String>, month_start: NaiveDate) -> Self {
        Self {
            campground_id: campground_id.into(),
            month_start,
        }
    }
}

/// One campsite's availability summary for a single month.
///
/// `available_days` is never empty; sites without open dates are dropped
/// before a summary is built. `range_labels` partitions `available_days`
/// into maximal contiguous day runs, in ascending day order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteAvailability {
    /// Campsite id, used for the public detail link.
    pub site_id: String,
    /// Short site label shown to campers.
    pub site_label: String,
    /// Loop the site belongs to.
    pub loop_name: String,
    /// Site type as reported upstream.
    pub campsite_type: String,
    /// Open dates as `MM/DD` labels, ascending.
    pub available_days: Vec<String>,
    /// Compact label per contiguous run, e.g. `"07/01-07/03"`.
    pub range_labels: Vec<String>,
}

impl SiteAvailability {
    /// Public Rec.gov detail page for this campsite.
    pub fn detail_url(&self) -> String {
        format!(
            "https://www.recreation.gov/camping/campsites/{}",
            self.site_id
        )
    }

    /// Comma-joined day list. Doubles as the fetcher's sort key.
    pub fn joined_days(&self) -> String {
        self.available_days.join(",")
    }
}
