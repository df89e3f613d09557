//! Section Render Switch
//!
//! Decides what a dashboard section shows for a given slot: the error text,
//! the chart under its heading, or nothing.

use super::types::{CandlestickPoint, ChartData, ChartPayload};
use super::{Dataset, SeriesChart};
use crate::slot::Slot;

/// What one dashboard section displays
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView<'a> {
    /// Pending, or settled with nothing to draw
    Nothing,
    /// Fetch failed
    Error(&'a str),
    /// Chart.js chart under `heading`
    Chart {
        heading: &'static str,
        chart: SeriesChart,
        data: &'a ChartData,
    },
    /// ApexCharts candlestick under `heading`
    Candlestick {
        heading: &'static str,
        points: &'a [CandlestickPoint],
    },
}

impl<'a> SectionView<'a> {
    /// Error first, then data, then nothing
    pub fn of(dataset: Dataset, slot: &'a Slot<ChartPayload>) -> Self {
        match slot {
            Slot::Failed(message) => SectionView::Error(message),
            Slot::Ready(payload) if payload.is_empty() => SectionView::Nothing,
            Slot::Ready(ChartPayload::Series(data)) => match dataset.series_chart() {
                Some(chart) => SectionView::Chart {
                    heading: dataset.heading(),
                    chart,
                    data,
                },
                None => SectionView::Nothing,
            },
            Slot::Ready(ChartPayload::Candlestick(points)) => SectionView::Candlestick {
                heading: dataset.heading(),
                points,
            },
            Slot::Empty => SectionView::Nothing,
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, SectionView::Nothing)
    }
}
