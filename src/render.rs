//! Snapshot Rendering
//!
//! Terminal and JSON renderings of a dashboard snapshot, driven by the same
//! section switch as the browser view.

use std::fmt::Write;

use serde_json::{json, Map, Value};

use crate::charts::{apex_config, chartjs_config, ChartData, SectionView};
use crate::view::DashboardSnapshot;

/// Page heading
pub const DASHBOARD_HEADING: &str = "Dashboard";

/// Plain-text rendering: empty sections produce no output at all
pub fn text(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", DASHBOARD_HEADING);

    for (_, section) in snapshot.sections() {
        match section {
            SectionView::Nothing => {}
            SectionView::Error(message) => {
                let _ = writeln!(out, "\n[error] {}", message);
            }
            SectionView::Chart { heading, data, .. } => {
                let _ = writeln!(out, "\n## {}", heading);
                write_series(&mut out, data);
            }
            SectionView::Candlestick { heading, points } => {
                let _ = writeln!(out, "\n## {}", heading);
                let _ = writeln!(
                    out,
                    "{:<20} {:>10} {:>10} {:>10} {:>10}",
                    "Time", "Open", "High", "Low", "Close"
                );
                for point in points {
                    let time = chrono::DateTime::from_timestamp_millis(point.x)
                        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| point.x.to_string());
                    let _ = writeln!(
                        out,
                        "{:<20} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                        time,
                        point.open(),
                        point.high(),
                        point.low(),
                        point.close()
                    );
                }
            }
        }
    }

    out
}

fn write_series(out: &mut String, data: &ChartData) {
    for dataset in &data.datasets {
        let _ = writeln!(out, "{}:", dataset.label);
        for (i, value) in dataset.data.iter().enumerate() {
            let label = data.labels.get(i).map(String::as_str).unwrap_or("-");
            let _ = writeln!(out, "  {:<20} {}", label, value);
        }
    }
}

/// JSON rendering keyed by dataset: `null`, `{"error"}` or `{"heading", "config"}`
pub fn json(snapshot: &DashboardSnapshot) -> Value {
    let mut sections = Map::new();

    for (dataset, section) in snapshot.sections() {
        let value = match section {
            SectionView::Nothing => Value::Null,
            SectionView::Error(message) => json!({ "error": message }),
            SectionView::Chart { heading, chart, data } => json!({
                "heading": heading,
                "config": chartjs_config(chart, data),
            }),
            SectionView::Candlestick { heading, points } => json!({
                "heading": heading,
                "config": apex_config(points),
            }),
        };
        sections.insert(dataset.key().to_string(), value);
    }

    Value::Object(sections)
}
