use campsite_availability::{Campground, MonthKey, SiteAvailability};

/// A user interaction or the completion of an [`Effect`].
#[derive(Debug, Clone)]
pub enum Action {
    /// The search input took focus; clears any stale error message.
    FocusInput,

    /// The search form was submitted with these keywords.
    SubmitSearch {
        /// Raw form input.
        keywords: String,
    },

    /// A search round trip finished with the filtered campground list
    /// (possibly empty).
    SearchSucceeded {
        /// Reservable campgrounds, in upstream order.
        campgrounds: Vec<Campground>,
    },

    /// A search round trip failed.
    SearchFailed {
        /// User-visible message.
        message: String,
    },

    /// A campground row was chosen from the results panel.
    SelectCampground {
        /// Zero-based index into the campground list.
        index: usize,
    },

    /// A month tab was chosen on the detail panel.
    ChangeMonth {
        /// Zero-based index into the month tabs.
        tab_index: usize,
    },

    /// An availability round trip finished.
    AvailabilityLoaded {
        /// Campground-month the sites belong to.
        key: MonthKey,
        /// Site summaries; empty means no reservable campsites.
        sites: Vec<SiteAvailability>,
    },

    /// An availability round trip failed.
    AvailabilityFailed {
        /// User-visible message.
        message: String,
    },

    /// Back from the detail panel to the results list.
    Back,
}

/// Work the driver must perform after a transition. At most one effect per
/// action, and the driver awaits it before accepting the next interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a keyword search.
    Search {
        /// Validated form input.
        keywords: String,
    },

    /// Fetch site availability for one campground-month.
    FetchAvailability {
        /// Campground-month to fetch.
        key: MonthKey,
    },
}
