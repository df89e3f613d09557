//! Headless Dashboard View
//!
//! Mounting the view launches one task per dataset. Each task holds only a
//! weak handle to the view and writes to its own once-settable cell, so
//! tasks never coordinate and a view dropped mid-flight simply discards
//! late results.

use std::sync::{Arc, OnceLock, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::charts::{ChartPayload, Dataset, SectionView};
use crate::client::{ChartSource, FetchError};
use crate::slot::Slot;

/// Dashboard view owning the four dataset slots
pub struct DashboardView {
    state: Arc<ViewState>,
    tasks: Vec<JoinHandle<()>>,
}

struct ViewState {
    slots: [OnceLock<Slot<ChartPayload>>; 4],
    /// Number of settled slots, bumped on every settle
    settled: watch::Sender<usize>,
}

impl ViewState {
    fn new() -> Self {
        let (settled, _) = watch::channel(0);
        Self {
            slots: Default::default(),
            settled,
        }
    }

    fn settle(&self, dataset: Dataset, slot: Slot<ChartPayload>) {
        if self.slots[dataset.index()].set(slot).is_ok() {
            self.settled.send_modify(|count| *count += 1);
        } else {
            tracing::warn!(dataset = %dataset, "Slot already settled, ignoring result");
        }
    }

    fn slot(&self, dataset: Dataset) -> Slot<ChartPayload> {
        self.slots[dataset.index()].get().cloned().unwrap_or_default()
    }
}

impl DashboardView {
    /// Mount the view: fire all four fetches, each exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S: ChartSource>(source: Arc<S>) -> Self {
        let state = Arc::new(ViewState::new());

        let tasks = Dataset::ALL
            .into_iter()
            .map(|dataset| {
                let source = Arc::clone(&source);
                let view = Arc::downgrade(&state);
                tokio::spawn(load(dataset, source, view))
            })
            .collect();

        tracing::debug!("Dashboard mounted, {} fetches in flight", Dataset::ALL.len());
        Self { state, tasks }
    }

    /// Current state of one slot
    pub fn slot(&self, dataset: Dataset) -> Slot<ChartPayload> {
        self.state.slot(dataset)
    }

    /// Current state of all slots
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            slots: Dataset::ALL.map(|dataset| self.state.slot(dataset)),
        }
    }

    /// Watch the number of settled slots; changes on every settle
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.state.settled.subscribe()
    }

    /// Number of slots that have settled so far
    pub fn settled_count(&self) -> usize {
        *self.state.settled.borrow()
    }

    /// Wait until every slot has settled
    pub async fn settled(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self.state`, so this never sees a closed channel
        let _ = rx.wait_for(|count| *count >= Dataset::ALL.len()).await;
    }

    /// Tear the view down. Fetches still in flight keep running and their
    /// results are dropped.
    ///
    /// Returns the load task handles; dropping them leaves the tasks
    /// detached.
    pub fn unmount(self) -> Vec<JoinHandle<()>> {
        tracing::debug!(settled = self.settled_count(), "Dashboard unmounted");
        self.tasks
    }
}

async fn load<S: ChartSource>(dataset: Dataset, source: Arc<S>, view: Weak<ViewState>) {
    let outcome = fetch_payload(source.as_ref(), dataset).await;

    let Some(state) = view.upgrade() else {
        match &outcome {
            Ok(_) => tracing::debug!(dataset = %dataset, "View unmounted, discarding result"),
            Err(e) => tracing::debug!(
                dataset = %dataset,
                error = %e,
                "View unmounted, discarding failed fetch"
            ),
        }
        return;
    };

    if let Err(e) = &outcome {
        tracing::error!(dataset = %dataset, error = %e, "Error fetching chart data");
    }

    state.settle(dataset, dataset.settle(outcome));
}

async fn fetch_payload<S: ChartSource>(
    source: &S,
    dataset: Dataset,
) -> Result<ChartPayload, FetchError> {
    let body = source.fetch(dataset).await?;
    Ok(crate::charts::reshape(dataset, body)?)
}

/// Point-in-time copy of the four slots
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    slots: [Slot<ChartPayload>; 4],
}

impl DashboardSnapshot {
    pub fn new(slots: [Slot<ChartPayload>; 4]) -> Self {
        Self { slots }
    }

    pub fn slot(&self, dataset: Dataset) -> &Slot<ChartPayload> {
        &self.slots[dataset.index()]
    }

    /// Section views in render order
    pub fn sections(&self) -> impl Iterator<Item = (Dataset, SectionView<'_>)> {
        Dataset::ALL
            .into_iter()
            .map(move |dataset| (dataset, SectionView::of(dataset, self.slot(dataset))))
    }

    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(Slot::is_settled)
    }
}
