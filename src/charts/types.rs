//! Chart Types
//!
//! Raw API payloads and the chart-ready structures handed to the renderers.

use serde::{Deserialize, Serialize};

// ============ Raw API Payloads ============

/// Body of the line, bar and pie endpoints
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeriesPayload {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Body of the candlestick endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CandlestickPayload {
    pub data: Vec<RawCandle>,
}

/// A single OHLC entry as the API sends it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawCandle {
    /// ISO 8601 date or date-time
    pub x: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

// ============ Chart-Ready Structures ============

/// Category chart data in the shape Chart.js consumes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One named series with its styling
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl ChartDataset {
    /// Create an unstyled series
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
            border_width: None,
            fill: None,
        }
    }

    pub fn border_color(mut self, paint: Paint) -> Self {
        self.border_color = Some(paint);
        self
    }

    pub fn background_color(mut self, paint: Paint) -> Self {
        self.background_color = Some(paint);
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// A color applied to a whole series, or a palette applied per element
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    Palette(Vec<String>),
}

impl Paint {
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }

    pub fn palette(colors: &[&str]) -> Self {
        Paint::Palette(colors.iter().map(|c| c.to_string()).collect())
    }

    /// Color of the element at `index`; palettes wrap around.
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self {
            Paint::Solid(color) => Some(color),
            Paint::Palette(colors) if colors.is_empty() => None,
            Paint::Palette(colors) => Some(&colors[index % colors.len()]),
        }
    }
}

/// One candlestick in the shape ApexCharts consumes
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CandlestickPoint {
    /// Epoch milliseconds
    pub x: i64,
    /// `[open, high, low, close]`, in exactly this order
    pub y: [f64; 4],
}

impl CandlestickPoint {
    pub fn open(&self) -> f64 {
        self.y[0]
    }

    pub fn high(&self) -> f64 {
        self.y[1]
    }

    pub fn low(&self) -> f64 {
        self.y[2]
    }

    pub fn close(&self) -> f64 {
        self.y[3]
    }
}

/// Reshaped result of one dataset fetch
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPayload {
    Series(ChartData),
    Candlestick(Vec<CandlestickPoint>),
}

impl ChartPayload {
    pub fn as_series(&self) -> Option<&ChartData> {
        match self {
            ChartPayload::Series(data) => Some(data),
            ChartPayload::Candlestick(_) => None,
        }
    }

    pub fn as_candlestick(&self) -> Option<&[CandlestickPoint]> {
        match self {
            ChartPayload::Candlestick(points) => Some(points),
            ChartPayload::Series(_) => None,
        }
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        match self {
            ChartPayload::Series(_) => false,
            ChartPayload::Candlestick(points) => points.is_empty(),
        }
    }
}
