//! # RecGov
//!
//! This crate provides a client for the Rec.gov API, which is used to search for
//! campgrounds and to retrieve month-at-a-time campsite availability.

/// HTTP client for the search and availability endpoints.
mod client;
pub use client::*;

/// Wire types and errors for the Rec.gov API.
mod types;
pub use types::*;
