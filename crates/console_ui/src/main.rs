//! Interactive terminal front end for the campsite finder.
//!
//! Maps typed commands onto view-state actions, runs the effects a
//! transition asks for, and renders the resulting panel. All the logic
//! lives in the library crates; this binary is plumbing.

mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use campsite_availability::{AvailabilityFetcher, CampgroundSearcher, SearchError};
use chrono::Utc;
use rec_gov::{CampgroundApi, DEFAULT_BASE_URL, RecGovClient};
use view_state::{
    Action, Effect, MSG_AVAILABILITY_NETWORK_FAILURE, MSG_NO_MATCHES, MSG_SEARCH_NETWORK_FAILURE,
    Panel, ViewState, reduce,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let base_url =
        std::env::var("RECGOV_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    log::info!("Using Rec.gov base URL: {}", base_url);

    let client = match RecGovClient::new(Some(base_url)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to create Rec.gov client: {}", e);
            std::process::exit(1);
        }
    };

    let api: Arc<dyn CampgroundApi> = client;
    let searcher = CampgroundSearcher::new(Arc::clone(&api));
    let mut fetcher = AvailabilityFetcher::new(Arc::clone(&api));

    let mut state = ViewState::new(Utc::now().date_naive());

    println!("Campsite finder — search Rec.gov campgrounds");
    render::help();

    let stdin = io::stdin();
    loop {
        render::panel(&state);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        // Typing anything is the interaction that clears a stale error.
        let (next, _) = reduce(state, Action::FocusInput);
        state = next;

        let Some(action) = parse_command(line, &state) else {
            render::help();
            continue;
        };

        let (next, effect) = reduce(state, action);
        state = next;

        if let Some(effect) = effect {
            let completion = run_effect(effect, &searcher, &mut fetcher).await;
            let (next, _) = reduce(state, completion);
            state = next;
        }
    }

    Ok(())
}

/// Map one input line onto an action. `None` means the line was not a
/// recognized command for the current panel.
fn parse_command(line: &str, state: &ViewState) -> Option<Action> {
    if let Some(keywords) = line.strip_prefix("search ") {
        return Some(Action::SubmitSearch {
            keywords: keywords.trim().to_string(),
        });
    }

    if matches!(line, "b" | "back") {
        return Some(Action::Back);
    }

    if let Some(rest) = line
        .strip_prefix("month ")
        .or_else(|| line.strip_prefix("m "))
    {
        let n: usize = rest.trim().parse().ok()?;
        if (1..=state.month_tabs.len()).contains(&n) {
            return Some(Action::ChangeMonth { tab_index: n - 1 });
        }
        return None;
    }

    if let Ok(n) = line.parse::<usize>() {
        if state.panel() == Panel::Results && (1..=state.campgrounds.len()).contains(&n) {
            return Some(Action::SelectCampground { index: n - 1 });
        }
    }

    None
}

/// Run one effect and turn its outcome into the completion action the
/// reducer expects. Errors collapse to the user-visible message strings.
async fn run_effect(
    effect: Effect,
    searcher: &CampgroundSearcher,
    fetcher: &mut AvailabilityFetcher,
) -> Action {
    match effect {
        Effect::Search { keywords } => match searcher.search(&keywords).await {
            Ok(campgrounds) => Action::SearchSucceeded { campgrounds },
            Err(SearchError::NoMatches) => Action::SearchFailed {
                message: MSG_NO_MATCHES.to_string(),
            },
            Err(SearchError::InvalidKeywords(message)) => Action::SearchFailed { message },
            Err(err) => {
                log::warn!("Search request failed: {}", err);
                Action::SearchFailed {
                    message: MSG_SEARCH_NETWORK_FAILURE.to_string(),
                }
            }
        },

        Effect::FetchAvailability { key } => {
            match fetcher
                .site_availability(&key.campground_id, key.month_start)
                .await
            {
                Ok(sites) => Action::AvailabilityLoaded { key, sites },
                Err(err) => {
                    log::warn!("Availability request failed: {}", err);
                    Action::AvailabilityFailed {
                        message: MSG_AVAILABILITY_NETWORK_FAILURE.to_string(),
                    }
                }
            }
        }
    }
}
