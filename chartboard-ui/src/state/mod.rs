//! Dashboard State
//!
//! One reactive slot per dataset, owned by the dashboard page.

use chartboard::charts::{ChartPayload, Dataset};
use chartboard::Slot;
use leptos::*;

/// Per-dataset slots of the dashboard page
#[derive(Clone, Copy)]
pub struct DashboardState {
    slots: [RwSignal<Slot<ChartPayload>>; 4],
}

impl DashboardState {
    /// Create all slots `Empty` under the current reactive owner
    pub fn new() -> Self {
        Self {
            slots: Dataset::ALL.map(|_| create_rw_signal(Slot::Empty)),
        }
    }

    pub fn slot(&self, dataset: Dataset) -> RwSignal<Slot<ChartPayload>> {
        self.slots[dataset.index()]
    }

    /// Record a settled fetch.
    ///
    /// Returns `None` once the page has been torn down; the outcome is
    /// dropped in that case.
    pub fn settle(&self, dataset: Dataset, settled: Slot<ChartPayload>) -> Option<bool> {
        self.slot(dataset).try_update(|slot| slot.settle(settled))
    }
}
