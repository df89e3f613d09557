//! Renderer Configurations
//!
//! Builds the configuration objects passed to Chart.js (line, bar, pie) and
//! ApexCharts (candlestick).

use serde::Serialize;
use serde_json::{json, Value};

use super::types::{CandlestickPoint, ChartData};
use super::{Dataset, SeriesChart};

/// Height of the candlestick chart in pixels
pub const CANDLESTICK_HEIGHT: u32 = 350;

/// `new Chart(canvas, config)` argument
pub fn chartjs_config(chart: SeriesChart, data: &ChartData) -> Value {
    json!({
        "type": chart.chartjs_type(),
        "data": data,
    })
}

/// Static ApexCharts options for the candlestick section
#[derive(Debug, Clone, Serialize)]
pub struct CandlestickOptions {
    pub chart: ApexChartOptions,
    pub title: ApexTitle,
    pub xaxis: ApexAxis,
    pub yaxis: ApexYAxis,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApexChartOptions {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApexTitle {
    pub text: &'static str,
    pub align: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApexAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApexYAxis {
    pub tooltip: ApexTooltip,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApexTooltip {
    pub enabled: bool,
}

impl Default for CandlestickOptions {
    fn default() -> Self {
        Self {
            chart: ApexChartOptions {
                kind: "candlestick",
                height: CANDLESTICK_HEIGHT,
            },
            title: ApexTitle {
                text: Dataset::Candlestick.heading(),
                align: "left",
            },
            xaxis: ApexAxis { kind: "datetime" },
            yaxis: ApexYAxis {
                tooltip: ApexTooltip { enabled: true },
            },
        }
    }
}

/// `new ApexCharts(element, options)` argument: static options plus the
/// single candlestick series.
pub fn apex_config(points: &[CandlestickPoint]) -> Value {
    let mut config = serde_json::to_value(CandlestickOptions::default())
        .unwrap_or_else(|_| json!({}));

    if let Value::Object(map) = &mut config {
        map.insert("series".to_string(), json!([{ "data": points }]));
    }

    config
}
