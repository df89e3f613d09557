//! Payload Transforms
//!
//! Pure mappings from raw API bodies to chart-ready structures. Styling
//! values here are the exact literals the renderers expect.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::types::{
    CandlestickPayload, CandlestickPoint, ChartData, ChartDataset, ChartPayload, Paint,
    SeriesPayload,
};
use super::{Dataset, SeriesChart};

pub const LINE_BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";

pub const BAR_BACKGROUND_COLOR: &str = "rgba(54, 162, 235, 0.2)";
pub const BAR_BORDER_COLOR: &str = "rgba(54, 162, 235, 1)";

pub const PIE_BACKGROUND_COLORS: [&str; 3] = [
    "rgba(255, 99, 132, 0.2)",
    "rgba(54, 162, 235, 0.2)",
    "rgba(255, 206, 86, 0.2)",
];
pub const PIE_BORDER_COLORS: [&str; 3] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
];

/// Errors turning a response body into chart data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Body does not have the expected shape
    #[error("Malformed payload: {0}")]
    Decode(String),

    /// Candlestick date that is not ISO 8601
    #[error("Invalid timestamp {value:?} at index {index}")]
    InvalidTimestamp { index: usize, value: String },
}

/// Line series: one dataset, teal stroke, no fill
pub fn line_chart(payload: SeriesPayload) -> ChartData {
    let dataset = ChartDataset::new(SeriesChart::Line.series_label(), payload.data)
        .border_color(Paint::solid(LINE_BORDER_COLOR))
        .fill(false);

    ChartData {
        labels: payload.labels,
        datasets: vec![dataset],
    }
}

/// Bar series: one dataset, translucent blue fill with a solid border
pub fn bar_chart(payload: SeriesPayload) -> ChartData {
    let dataset = ChartDataset::new(SeriesChart::Bar.series_label(), payload.data)
        .background_color(Paint::solid(BAR_BACKGROUND_COLOR))
        .border_color(Paint::solid(BAR_BORDER_COLOR))
        .border_width(1);

    ChartData {
        labels: payload.labels,
        datasets: vec![dataset],
    }
}

/// Pie series: one dataset colored per slice from a 3-color palette
pub fn pie_chart(payload: SeriesPayload) -> ChartData {
    let dataset = ChartDataset::new(SeriesChart::Pie.series_label(), payload.data)
        .background_color(Paint::palette(&PIE_BACKGROUND_COLORS))
        .border_color(Paint::palette(&PIE_BORDER_COLORS))
        .border_width(1);

    ChartData {
        labels: payload.labels,
        datasets: vec![dataset],
    }
}

/// Candlestick series: dates become epoch milliseconds, prices become
/// `[open, high, low, close]`.
pub fn candlestick_series(
    payload: CandlestickPayload,
) -> Result<Vec<CandlestickPoint>, TransformError> {
    payload
        .data
        .into_iter()
        .enumerate()
        .map(|(index, candle)| {
            let x = parse_timestamp_millis(&candle.x).ok_or(TransformError::InvalidTimestamp {
                index,
                value: candle.x.clone(),
            })?;

            Ok(CandlestickPoint {
                x,
                y: [candle.open, candle.high, candle.low, candle.close],
            })
        })
        .collect()
}

/// Parse an ISO 8601 date or date-time into epoch milliseconds.
///
/// Values without an offset are read as UTC; a bare date is UTC midnight.
pub fn parse_timestamp_millis(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc().timestamp_millis());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Decode a JSON body and reshape it for `dataset`
pub fn reshape(dataset: Dataset, body: serde_json::Value) -> Result<ChartPayload, TransformError> {
    match dataset {
        Dataset::Line => decode(body).map(line_chart).map(ChartPayload::Series),
        Dataset::Bar => decode(body).map(bar_chart).map(ChartPayload::Series),
        Dataset::Pie => decode(body).map(pie_chart).map(ChartPayload::Series),
        Dataset::Candlestick => {
            let points = candlestick_series(decode(body)?)?;
            Ok(ChartPayload::Candlestick(points))
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, TransformError> {
    serde_json::from_value(body).map_err(|e| TransformError::Decode(e.to_string()))
}
