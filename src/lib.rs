//! # Chartboard
//!
//! A dashboard of four independent charts (line, bar, pie, candlestick) fed
//! by a fixed chart-data API.
//!
//! ## Modules
//!
//! - [`charts`]: Datasets, payload types, reshape transforms and renderer configs
//! - [`slot`]: Per-dataset `Empty | Ready | Failed` view state
//!
//! With the default `native` feature:
//!
//! - [`client`]: HTTP chart source built on reqwest
//! - [`view`]: Headless dashboard view running one tokio task per dataset
//! - [`render`]: Text and JSON renderings of a dashboard snapshot
//! - [`server`]: Static host for the built UI with the root redirect
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: Tracing subscriber setup
//!
//! The browser application lives in the `chartboard-ui` crate and uses this
//! crate without default features.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chartboard::client::HttpChartClient;
//! use chartboard::view::DashboardView;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HttpChartClient::new("http://127.0.0.1:8000")?);
//!
//!     let view = DashboardView::mount(client);
//!     view.settled().await;
//!
//!     println!("{}", chartboard::render::text(&view.snapshot()));
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod slot;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod render;
#[cfg(feature = "native")]
pub mod server;
#[cfg(feature = "native")]
pub mod view;

pub use charts::{
    CandlestickPoint, ChartData, ChartDataset, ChartPayload, Dataset, Paint, SectionView,
    SeriesChart, TransformError,
};
pub use slot::Slot;

#[cfg(feature = "native")]
pub use client::{ChartSource, FetchError, HttpChartClient, DEFAULT_API_BASE};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use server::{build_router, serve, ServerError};
#[cfg(feature = "native")]
pub use view::{DashboardSnapshot, DashboardView};
