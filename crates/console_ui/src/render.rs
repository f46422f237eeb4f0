//! Plain-text rendering of the two panels. Reads the view state, writes to
//! stdout, changes nothing.

use campsite_availability::SiteAvailability;
use view_state::{Panel, ViewState};

// Alternate runs are tinted so adjacent ranges read apart at a glance.
const RUN_TINT: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Print the command reference.
pub fn help() {
    println!("commands:");
    println!("  search <keywords>   find campgrounds (3-50 characters)");
    println!("  <n>                 open campground n from the list");
    println!("  month <n> | m <n>   switch the detail panel to month tab n");
    println!("  back | b            return to the results list");
    println!("  quit | q            exit");
}

/// Render whichever panel the state calls for, plus any error message.
pub fn panel(state: &ViewState) {
    match state.panel() {
        Panel::Results => results(state),
        Panel::Detail => detail(state),
    }

    if let Some(message) = &state.error_message {
        println!("! {}", message);
    }
}

fn results(state: &ViewState) {
    if state.campgrounds.is_empty() {
        return;
    }

    println!(
        "{:>3}  {:>5}  {:<36} {:<32} {}",
        "#", "Sites", "Name", "Parent", "Location"
    );
    for (idx, camp) in state.campgrounds.iter().enumerate() {
        println!(
            "{:>3}  {:>5}  {:<36} {:<32} {}, {}",
            idx + 1,
            camp.site_count,
            camp.name,
            camp.parent_name,
            camp.city,
            camp.state_code
        );
    }
}

fn detail(state: &ViewState) {
    let Some(camp) = &state.selected else {
        return;
    };

    let tabs: Vec<String> = state
        .month_tabs
        .iter()
        .enumerate()
        .map(|(idx, month)| {
            let name = month.format("%b").to_string();
            if *month == state.selected_month {
                format!("[{}:{}]", idx + 1, name)
            } else {
                format!(" {}:{} ", idx + 1, name)
            }
        })
        .collect();

    println!("◀ back   {}", tabs.join(" "));
    println!("{}", camp.name);

    if state.sites.is_empty() {
        return;
    }

    println!(
        "{:<12} {:<20} {:<26} {}",
        "Site", "Loop", "Type", "Available days"
    );
    for site in &state.sites {
        println!(
            "{:<12} {:<20} {:<26} {}",
            site.site_label,
            site.loop_name,
            site.campsite_type,
            run_labels(site)
        );
        println!("             {}", site.detail_url());
    }
}

/// Join a site's range labels, tinting every other run.
fn run_labels(site: &SiteAvailability) -> String {
    site.range_labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            if idx % 2 == 0 {
                format!("{}{}{}", RUN_TINT, label, RESET)
            } else {
                label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
