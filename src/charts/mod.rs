//! Chart Datasets
//!
//! The four datasets shown on the dashboard, the shapes they arrive in, and
//! the shapes the renderers expect.
//!
//! | Dataset | Endpoint | Renderer |
//! |---|---|---|
//! | Line | `/api/line-chart-data/` | Chart.js |
//! | Bar | `/api/bar-chart-data/` | Chart.js |
//! | Pie | `/api/pie-chart-data/` | Chart.js |
//! | Candlestick | `/api/candlestick-data/` | ApexCharts |

pub mod config;
pub mod section;
pub mod transform;
pub mod types;

pub use config::{apex_config, chartjs_config, CandlestickOptions, CANDLESTICK_HEIGHT};
pub use section::SectionView;
pub use transform::{reshape, TransformError};
pub use types::{
    CandlestickPayload, CandlestickPoint, ChartData, ChartDataset, ChartPayload, Paint,
    RawCandle, SeriesPayload,
};

use std::fmt;

use crate::slot::Slot;

/// One of the four dashboard datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Line,
    Bar,
    Pie,
    Candlestick,
}

impl Dataset {
    /// All datasets, in render order
    pub const ALL: [Dataset; 4] = [
        Dataset::Line,
        Dataset::Bar,
        Dataset::Pie,
        Dataset::Candlestick,
    ];

    /// Position in [`Dataset::ALL`]
    pub fn index(self) -> usize {
        match self {
            Dataset::Line => 0,
            Dataset::Bar => 1,
            Dataset::Pie => 2,
            Dataset::Candlestick => 3,
        }
    }

    /// API path, relative to the base origin
    pub fn endpoint(self) -> &'static str {
        match self {
            Dataset::Line => "/api/line-chart-data/",
            Dataset::Bar => "/api/bar-chart-data/",
            Dataset::Pie => "/api/pie-chart-data/",
            Dataset::Candlestick => "/api/candlestick-data/",
        }
    }

    /// Section heading
    pub fn heading(self) -> &'static str {
        match self {
            Dataset::Line => "Line Chart",
            Dataset::Bar => "Bar Chart",
            Dataset::Pie => "Pie Chart",
            Dataset::Candlestick => "Candlestick Chart",
        }
    }

    /// The Chart.js chart drawing this dataset; `None` for the candlestick
    pub fn series_chart(self) -> Option<SeriesChart> {
        match self {
            Dataset::Line => Some(SeriesChart::Line),
            Dataset::Bar => Some(SeriesChart::Bar),
            Dataset::Pie => Some(SeriesChart::Pie),
            Dataset::Candlestick => None,
        }
    }

    /// Message shown in place of the chart when the fetch fails
    pub fn error_message(self) -> &'static str {
        match self {
            Dataset::Line => "Failed to load Line Chart data.",
            Dataset::Bar => "Failed to load Bar Chart data.",
            Dataset::Pie => "Failed to load Pie Chart data.",
            Dataset::Candlestick => "Failed to load Candlestick Chart data.",
        }
    }

    /// Short machine name
    pub fn key(self) -> &'static str {
        match self {
            Dataset::Line => "line",
            Dataset::Bar => "bar",
            Dataset::Pie => "pie",
            Dataset::Candlestick => "candlestick",
        }
    }

    /// Full request URL under `base`
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.endpoint())
    }

    /// Settle a fetch outcome into a slot.
    ///
    /// Any error collapses into this dataset's fixed message; the error
    /// itself is for the caller to log.
    pub fn settle<E>(self, outcome: Result<ChartPayload, E>) -> Slot<ChartPayload> {
        match outcome {
            Ok(payload) => Slot::Ready(payload),
            Err(_) => Slot::Failed(self.error_message().to_string()),
        }
    }
}

/// A dataset drawn by Chart.js
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesChart {
    Line,
    Bar,
    Pie,
}

impl SeriesChart {
    pub const ALL: [SeriesChart; 3] = [SeriesChart::Line, SeriesChart::Bar, SeriesChart::Pie];

    pub fn dataset(self) -> Dataset {
        match self {
            SeriesChart::Line => Dataset::Line,
            SeriesChart::Bar => Dataset::Bar,
            SeriesChart::Pie => Dataset::Pie,
        }
    }

    /// Chart.js `type`
    pub fn chartjs_type(self) -> &'static str {
        match self {
            SeriesChart::Line => "line",
            SeriesChart::Bar => "bar",
            SeriesChart::Pie => "pie",
        }
    }

    /// Legend label of the single series
    pub fn series_label(self) -> &'static str {
        match self {
            SeriesChart::Line => "Line Chart Data",
            SeriesChart::Bar => "Bar Chart Data",
            SeriesChart::Pie => "Pie Chart Data",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_render_order() {
        for (i, dataset) in Dataset::ALL.iter().enumerate() {
            assert_eq!(dataset.index(), i);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Dataset::Line.endpoint(), "/api/line-chart-data/");
        assert_eq!(Dataset::Bar.endpoint(), "/api/bar-chart-data/");
        assert_eq!(Dataset::Pie.endpoint(), "/api/pie-chart-data/");
        assert_eq!(Dataset::Candlestick.endpoint(), "/api/candlestick-data/");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        assert_eq!(
            Dataset::Pie.url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000/api/pie-chart-data/"
        );
        assert_eq!(
            Dataset::Line.url("http://127.0.0.1:8000"),
            "http://127.0.0.1:8000/api/line-chart-data/"
        );
    }

    #[test]
    fn test_settle_failure_uses_fixed_message() {
        for dataset in Dataset::ALL {
            let slot = dataset.settle::<&str>(Err("connection refused"));
            assert_eq!(slot.error(), Some(dataset.error_message()));
            assert!(slot.ready().is_none());
        }
        assert_eq!(
            Dataset::Bar.settle::<()>(Err(())),
            Slot::Failed("Failed to load Bar Chart data.".to_string())
        );
    }

    #[test]
    fn test_only_category_datasets_use_chartjs() {
        for chart in SeriesChart::ALL {
            assert_eq!(chart.dataset().series_chart(), Some(chart));
        }
        assert_eq!(Dataset::Candlestick.series_chart(), None);
    }

    #[test]
    fn test_settle_success() {
        let slot = Dataset::Candlestick.settle::<()>(Ok(ChartPayload::Candlestick(Vec::new())));
        assert!(slot.is_ready());
    }
}
