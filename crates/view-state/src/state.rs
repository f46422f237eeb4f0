use campsite_availability::{Campground, MonthKey, SiteAvailability};
use chrono::{Datelike, Months, NaiveDate};

/// Message shown when the search request itself fails.
pub const MSG_SEARCH_NETWORK_FAILURE: &str = "Network failure during search.";

/// Message shown when the availability request fails.
pub const MSG_AVAILABILITY_NETWORK_FAILURE: &str = "Network failure while retrieving campground.";

/// Message shown when the search response has no results collection.
pub const MSG_NO_MATCHES: &str = "No matching campgrounds...";

/// Message shown when a fetched month has no sites with open dates.
pub const MSG_NO_RESERVABLE_SITES: &str = "No reservable campsites.";

/// Message shown when the keyword length rule is violated.
pub const MSG_KEYWORDS_LENGTH: &str = "Keywords must be between 3 and 50 characters.";

/// How many month tabs the detail panel offers.
pub const MONTH_TAB_COUNT: u32 = 6;

/// Which panel the interface is showing. Derived from the state: Detail
/// whenever a campground is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The campground search-results list.
    Results,
    /// Month tabs plus the site-availability table for one campground.
    Detail,
}

/// The whole interactive session state. Transitioned only through
/// [`crate::reduce`]; the renderer reads it and never writes it.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Campgrounds from the last successful search.
    pub campgrounds: Vec<Campground>,
    /// Currently selected campground, if any.
    pub selected: Option<Campground>,
    /// Six consecutive first-of-month dates starting the current month.
    pub month_tabs: Vec<NaiveDate>,
    /// Month the detail panel shows.
    pub selected_month: NaiveDate,
    /// Site summaries for the selected campground-month.
    pub sites: Vec<SiteAvailability>,
    /// User-visible error, cleared on the next interaction.
    pub error_message: Option<String>,
}

impl ViewState {
    /// Fresh session state. The month tabs start with the month containing
    /// `today`, which is also the default selected month.
    pub fn new(today: NaiveDate) -> Self {
        let month_tabs = month_tabs(today);
        let selected_month = month_tabs.first().copied().unwrap_or(today);

        Self {
            campgrounds: Vec::new(),
            selected: None,
            month_tabs,
            selected_month,
            sites: Vec::new(),
            error_message: None,
        }
    }

    /// Which panel to show.
    pub fn panel(&self) -> Panel {
        if self.selected.is_some() {
            Panel::Detail
        } else {
            Panel::Results
        }
    }

    /// Cache key for the current selection and month, when a campground is
    /// selected.
    pub fn current_key(&self) -> Option<MonthKey> {
        self.selected
            .as_ref()
            .map(|camp| MonthKey::new(camp.id.clone(), self.selected_month))
    }
}

/// Six consecutive first-of-month dates starting with `today`'s month.
pub fn month_tabs(today: NaiveDate) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    (0..MONTH_TAB_COUNT)
        .map(|step| first + Months::new(step))
        .collect()
}
