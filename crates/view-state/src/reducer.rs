use tracing::debug;

use crate::actions::{Action, Effect};
use crate::state::{MSG_KEYWORDS_LENGTH, MSG_NO_RESERVABLE_SITES, ViewState};

/// Apply one action to the session state.
///
/// Pure: no I/O happens here. Network work is returned as an [`Effect`]
/// for the driver to run; its outcome comes back as another action.
/// Unknown indices and stale completions leave the state unchanged.
pub fn reduce(mut state: ViewState, action: Action) -> (ViewState, Option<Effect>) {
    match action {
        Action::FocusInput => {
            state.error_message = None;
            (state, None)
        }

        Action::SubmitSearch { keywords } => {
            let length = keywords.chars().count();
            if !(3..=50).contains(&length) {
                state.error_message = Some(MSG_KEYWORDS_LENGTH.to_string());
                return (state, None);
            }
            state.error_message = None;
            (state, Some(Effect::Search { keywords }))
        }

        Action::SearchSucceeded { campgrounds } => {
            debug!("Search produced {} campgrounds", campgrounds.len());
            state.error_message = None;
            state.selected = None;
            state.sites.clear();
            state.campgrounds = campgrounds;
            (state, None)
        }

        Action::SearchFailed { message } => {
            state.error_message = Some(message);
            (state, None)
        }

        Action::SelectCampground { index } => {
            let Some(camp) = state.campgrounds.get(index).cloned() else {
                return (state, None);
            };
            debug!("Selected campground {} ({})", camp.name, camp.id);
            state.selected = Some(camp);
            if let Some(&first) = state.month_tabs.first() {
                state.selected_month = first;
            }
            state.sites.clear();
            state.error_message = None;
            let effect = state
                .current_key()
                .map(|key| Effect::FetchAvailability { key });
            (state, effect)
        }

        Action::ChangeMonth { tab_index } => {
            if state.selected.is_none() {
                return (state, None);
            }
            let Some(&month) = state.month_tabs.get(tab_index) else {
                return (state, None);
            };
            state.selected_month = month;
            state.error_message = None;
            // Current sites stay on screen until the new month arrives.
            let effect = state
                .current_key()
                .map(|key| Effect::FetchAvailability { key });
            (state, effect)
        }

        Action::AvailabilityLoaded { key, sites } => {
            if state.current_key().as_ref() != Some(&key) {
                debug!("Dropping availability for stale key {:?}", key);
                return (state, None);
            }
            state.error_message = if sites.is_empty() {
                Some(MSG_NO_RESERVABLE_SITES.to_string())
            } else {
                None
            };
            state.sites = sites;
            (state, None)
        }

        Action::AvailabilityFailed { message } => {
            // Previously displayed sites are deliberately left in place.
            state.error_message = Some(message);
            (state, None)
        }

        Action::Back => {
            state.selected = None;
            state.sites.clear();
            state.error_message = None;
            (state, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use campsite_availability::{Campground, MonthKey, SiteAvailability};
    use chrono::NaiveDate;

    use super::*;
    use crate::state::{MSG_SEARCH_NETWORK_FAILURE, Panel};

    fn camp(id: &str, name: &str) -> Campground {
        Campground {
            id: id.to_string(),
            name: name.to_string(),
            parent_name: "Yosemite National Park".to_string(),
            city: "Yosemite Valley".to_string(),
            state_code: "CA".to_string(),
            site_count: "235".to_string(),
            reservable: true,
            entity_type: "campground".to_string(),
        }
    }

    fn site(label: &str) -> SiteAvailability {
        SiteAvailability {
            site_id: "1001".to_string(),
            site_label: label.to_string(),
            loop_name: String::new(),
            campsite_type: String::new(),
            available_days: vec!["07/01".to_string()],
            range_labels: vec!["07/01".to_string()],
        }
    }

    fn fresh() -> ViewState {
        ViewState::new(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
    }

    fn with_results() -> ViewState {
        let (state, _) = reduce(
            fresh(),
            Action::SearchSucceeded {
                campgrounds: vec![camp("123", "Upper Pines"), camp("456", "Lower Pines")],
            },
        );
        state
    }

    #[test]
    fn valid_search_submit_emits_search_effect() {
        let (state, effect) = reduce(
            fresh(),
            Action::SubmitSearch {
                keywords: "yosemite".to_string(),
            },
        );

        assert!(state.error_message.is_none());
        assert_eq!(
            effect,
            Some(Effect::Search {
                keywords: "yosemite".to_string()
            })
        );
    }

    #[test]
    fn short_keywords_set_message_without_effect() {
        let (state, effect) = reduce(
            fresh(),
            Action::SubmitSearch {
                keywords: "yo".to_string(),
            },
        );

        assert_eq!(state.error_message.as_deref(), Some(MSG_KEYWORDS_LENGTH));
        assert!(effect.is_none());
    }

    #[test]
    fn search_success_replaces_list_and_returns_to_results() {
        let (mut state, _) = reduce(with_results(), Action::SelectCampground { index: 0 });
        assert_eq!(state.panel(), Panel::Detail);

        let replacement = vec![camp("789", "Hodgdon Meadow")];
        let (next, effect) = reduce(
            state.clone(),
            Action::SearchSucceeded {
                campgrounds: replacement.clone(),
            },
        );
        state = next;

        assert_eq!(state.panel(), Panel::Results);
        assert_eq!(state.campgrounds, replacement);
        assert!(state.sites.is_empty());
        assert!(effect.is_none());
    }

    #[test]
    fn search_failure_keeps_existing_list() {
        let state = with_results();

        let (state, _) = reduce(
            state,
            Action::SearchFailed {
                message: MSG_SEARCH_NETWORK_FAILURE.to_string(),
            },
        );

        assert_eq!(
            state.error_message.as_deref(),
            Some(MSG_SEARCH_NETWORK_FAILURE)
        );
        assert_eq!(state.campgrounds.len(), 2);
        assert_eq!(state.panel(), Panel::Results);
    }

    #[test]
    fn selecting_a_campground_fetches_the_default_month() {
        let (state, effect) = reduce(with_results(), Action::SelectCampground { index: 1 });

        assert_eq!(state.panel(), Panel::Detail);
        assert_eq!(state.selected.as_ref().map(|c| c.id.as_str()), Some("456"));
        let expected_key = MonthKey::new("456", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(
            effect,
            Some(Effect::FetchAvailability {
                key: expected_key
            })
        );
    }

    #[test]
    fn selecting_out_of_range_index_is_ignored() {
        let before = with_results();
        let (state, effect) = reduce(before.clone(), Action::SelectCampground { index: 9 });

        assert_eq!(state.panel(), Panel::Results);
        assert!(effect.is_none());
        assert_eq!(state.campgrounds, before.campgrounds);
    }

    #[test]
    fn changing_month_fetches_the_new_month() {
        let (state, _) = reduce(with_results(), Action::SelectCampground { index: 0 });

        let (state, effect) = reduce(state, Action::ChangeMonth { tab_index: 2 });

        let expected_month = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(state.selected_month, expected_month);
        assert_eq!(
            effect,
            Some(Effect::FetchAvailability {
                key: MonthKey::new("123", expected_month)
            })
        );
    }

    #[test]
    fn changing_month_without_selection_is_ignored() {
        let (state, effect) = reduce(with_results(), Action::ChangeMonth { tab_index: 2 });

        assert!(effect.is_none());
        assert_eq!(state.panel(), Panel::Results);
    }

    #[test]
    fn loaded_sites_land_when_key_matches() {
        let (state, effect) = reduce(with_results(), Action::SelectCampground { index: 0 });
        let Some(Effect::FetchAvailability { key }) = effect else {
            panic!("expected a fetch effect");
        };

        let (state, _) = reduce(
            state,
            Action::AvailabilityLoaded {
                key,
                sites: vec![site("A012")],
            },
        );

        assert_eq!(state.sites.len(), 1);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn empty_month_sets_no_reservable_sites_message() {
        let (state, effect) = reduce(with_results(), Action::SelectCampground { index: 0 });
        let Some(Effect::FetchAvailability { key }) = effect else {
            panic!("expected a fetch effect");
        };

        let (state, _) = reduce(
            state,
            Action::AvailabilityLoaded {
                key,
                sites: Vec::new(),
            },
        );

        assert_eq!(
            state.error_message.as_deref(),
            Some(MSG_NO_RESERVABLE_SITES)
        );
    }

    #[test]
    fn stale_availability_is_dropped() {
        let (state, _) = reduce(with_results(), Action::SelectCampground { index: 0 });

        // A completion for a different campground must not land.
        let stale_key = MonthKey::new("999", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let (state, _) = reduce(
            state,
            Action::AvailabilityLoaded {
                key: stale_key,
                sites: vec![site("Z999")],
            },
        );

        assert!(state.sites.is_empty());
    }

    #[test]
    fn availability_failure_keeps_current_sites() {
        let (state, effect) = reduce(with_results(), Action::SelectCampground { index: 0 });
        let Some(Effect::FetchAvailability { key }) = effect else {
            panic!("expected a fetch effect");
        };
        let (state, _) = reduce(
            state,
            Action::AvailabilityLoaded {
                key,
                sites: vec![site("A012")],
            },
        );

        let (state, _) = reduce(
            state,
            Action::AvailabilityFailed {
                message: "Network failure while retrieving campground.".to_string(),
            },
        );

        assert_eq!(state.sites.len(), 1);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn back_returns_to_results_and_keeps_the_list() {
        let (state, _) = reduce(with_results(), Action::SelectCampground { index: 0 });

        let (state, effect) = reduce(state, Action::Back);

        assert_eq!(state.panel(), Panel::Results);
        assert_eq!(state.campgrounds.len(), 2);
        assert!(state.sites.is_empty());
        assert!(effect.is_none());
    }

    #[test]
    fn focus_clears_the_error_message() {
        let (state, _) = reduce(
            fresh(),
            Action::SearchFailed {
                message: MSG_SEARCH_NETWORK_FAILURE.to_string(),
            },
        );
        assert!(state.error_message.is_some());

        let (state, _) = reduce(state, Action::FocusInput);
        assert!(state.error_message.is_none());
    }
}
