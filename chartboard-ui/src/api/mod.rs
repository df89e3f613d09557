//! API Access
//!
//! Chart-data API client for the browser.

pub mod client;

pub use client::fetch_dataset;
