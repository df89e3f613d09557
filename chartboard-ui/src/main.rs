//! Chartboard Dashboard
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//!
//! # Features
//!
//! - `/` redirects to `/dashboard`
//! - Four charts loaded independently on mount: line, bar and pie through
//!   Chart.js, candlestick through ApexCharts
//! - Per-chart error messages; a failing dataset never affects the others
//!
//! # Architecture
//!
//! Data shaping lives in the `chartboard` crate and is shared with the
//! native tools. This crate only fetches, stores and renders.

use leptos::*;

mod api;
mod app;
mod components;
mod engine;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
