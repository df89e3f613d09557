//! Chart Section
//!
//! Renders one dataset slot: error text, heading plus chart, or nothing.

use chartboard::charts::{ChartPayload, Dataset, SectionView};
use chartboard::Slot;
use leptos::*;

use super::{CandlestickChart, ChartCanvas};

/// Dashboard section for a single dataset
#[component]
pub fn ChartSection(dataset: Dataset, slot: RwSignal<Slot<ChartPayload>>) -> impl IntoView {
    move || slot.with(|slot| section_view(dataset, slot))
}

fn section_view(dataset: Dataset, slot: &Slot<ChartPayload>) -> View {
    match SectionView::of(dataset, slot) {
        SectionView::Nothing => ().into_view(),
        SectionView::Error(message) => view! {
            <p style="color: red">{message.to_string()}</p>
        }
        .into_view(),
        SectionView::Chart { heading, chart, data } => view! {
            <div>
                <h2>{heading}</h2>
                <ChartCanvas chart=chart data=data.clone() />
            </div>
        }
        .into_view(),
        SectionView::Candlestick { heading, points } => view! {
            <div>
                <h2>{heading}</h2>
                <CandlestickChart points=points.to_vec() />
            </div>
        }
        .into_view(),
    }
}
