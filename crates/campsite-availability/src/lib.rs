//! # Campsite Availability
//!
//! This crate holds the core of the campsite finder: domain types, the
//! contiguous-date-range collapser, the per-session availability cache, and
//! the two upstream-facing services (keyword search and monthly availability
//! summaries).

/// Domain types shared across the workspace.
mod types;
pub use types::*;

/// Grouping of available dates into contiguous runs.
pub mod date_ranges;

/// In-memory cache of computed availability summaries.
mod cache;
pub use cache::*;

/// Monthly availability fetching and summarization.
mod fetcher;
pub use fetcher::*;

/// Keyword search filtered to reservable campgrounds.
mod searcher;
pub use searcher::*;
