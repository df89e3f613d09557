//! Dashboard Page
//!
//! Loads the four datasets concurrently on mount and shows each one as soon
//! as it settles.

use chartboard::charts::Dataset;
use leptos::*;

use crate::api;
use crate::components::section::ChartSectionProps;
use crate::components::ChartSection;
use crate::state::DashboardState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = DashboardState::new();

    // Fetch every dataset once on mount; no reactive dependencies
    create_effect(move |_| {
        for dataset in Dataset::ALL {
            spawn_local(load(state, dataset));
        }
    });

    view! {
        <div>
            <h1>"Dashboard"</h1>
            {Dataset::ALL
                .into_iter()
                // `slot` is reserved attribute syntax in `view!`, so build the props directly
                .map(|dataset| {
                    ChartSection(
                        ChartSectionProps::builder()
                            .dataset(dataset)
                            .slot(state.slot(dataset))
                            .build(),
                    )
                })
                .collect_view()}
        </div>
    }
}

async fn load(state: DashboardState, dataset: Dataset) {
    let outcome = api::fetch_dataset(dataset).await;
    if let Err(e) = &outcome {
        web_sys::console::error_1(&format!("Failed to fetch {} data: {}", dataset, e).into());
    }

    if state.settle(dataset, dataset.settle(outcome)).is_none() {
        web_sys::console::debug_1(&format!("Dashboard gone, dropping {} data", dataset).into());
    }
}
