//! Chart Components
//!
//! Chart.js canvas for the line, bar and pie datasets, ApexCharts container
//! for the candlestick series. Each chart is created once its element is
//! mounted and destroyed when the component is cleaned up.

use chartboard::charts::{apex_config, chartjs_config, CandlestickPoint, ChartData, SeriesChart};
use leptos::*;

use crate::engine::{self, ApexChart, ChartJs};

/// Chart.js chart drawn on its own canvas
#[component]
pub fn ChartCanvas(chart: SeriesChart, data: ChartData) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let instance = store_value(None::<ChartJs>);
    let config = chartjs_config(chart, &data);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if instance.with_value(Option::is_some) {
            return;
        }

        match engine::chartjs(&canvas, &config) {
            Ok(created) => instance.set_value(Some(created)),
            Err(e) => engine::log_error(&format!("Failed to draw {} chart", chart.dataset()), &e),
        }
    });

    on_cleanup(move || {
        instance.try_update_value(|instance| {
            if let Some(instance) = instance.take() {
                instance.destroy();
            }
        });
    });

    view! { <canvas node_ref=canvas_ref /> }
}

/// ApexCharts candlestick chart
#[component]
pub fn CandlestickChart(points: Vec<CandlestickPoint>) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let chart = store_value(None::<ApexChart>);
    let config = apex_config(&points);

    create_effect(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        if chart.with_value(Option::is_some) {
            return;
        }

        match engine::apex(&container, &config) {
            Ok(created) => chart.set_value(Some(created)),
            Err(e) => engine::log_error("Failed to draw candlestick chart", &e),
        }
    });

    on_cleanup(move || {
        chart.try_update_value(|chart| {
            if let Some(chart) = chart.take() {
                chart.destroy();
            }
        });
    });

    view! { <div node_ref=container_ref /> }
}
