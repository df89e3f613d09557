//! Dashboard view behavior against a scripted chart source whose responses
//! are released one at a time by the test.

#![cfg(feature = "native")]

use async_trait::async_trait;
use chartboard::charts::transform::{bar_chart, line_chart, pie_chart};
use chartboard::charts::{CandlestickPoint, ChartPayload, Dataset, SectionView, SeriesPayload};
use chartboard::client::{ChartSource, FetchError};
use chartboard::slot::Slot;
use chartboard::view::DashboardView;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Outcome = Result<Value, FetchError>;

/// Chart source whose four responses are released by the test
struct ScriptedSource {
    pending: Mutex<HashMap<Dataset, oneshot::Receiver<Outcome>>>,
    calls: [AtomicUsize; 4],
    returned: AtomicUsize,
}

struct Controls {
    senders: HashMap<Dataset, oneshot::Sender<Outcome>>,
}

impl ScriptedSource {
    fn new() -> (Arc<Self>, Controls) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for dataset in Dataset::ALL {
            let (tx, rx) = oneshot::channel();
            pending.insert(dataset, rx);
            senders.insert(dataset, tx);
        }

        let source = Arc::new(Self {
            pending: Mutex::new(pending),
            calls: Default::default(),
            returned: AtomicUsize::new(0),
        });

        (source, Controls { senders })
    }

    fn calls(&self, dataset: Dataset) -> usize {
        self.calls[dataset.index()].load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChartSource for ScriptedSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Value, FetchError> {
        self.calls[dataset.index()].fetch_add(1, Ordering::SeqCst);

        let rx = self.pending.lock().unwrap().remove(&dataset);
        let outcome = match rx {
            Some(rx) => match rx.await {
                Ok(outcome) => outcome,
                // Sender dropped: the request hangs forever
                Err(_) => std::future::pending().await,
            },
            None => panic!("{} fetched twice", dataset),
        };

        self.returned.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}

impl Controls {
    fn resolve(&mut self, dataset: Dataset, outcome: Outcome) {
        let tx = self.senders.remove(&dataset).unwrap();
        let _ = tx.send(outcome);
    }

    fn hang(&mut self, dataset: Dataset) {
        self.senders.remove(&dataset);
    }
}

fn series_body() -> Value {
    json!({"labels": ["Jan", "Feb", "Mar"], "data": [65, 59, 80]})
}

fn candlestick_body() -> Value {
    json!({"data": [
        {"x": "2024-01-01T00:00:00Z", "open": 10, "high": 12, "low": 9, "close": 11},
        {"x": "2024-01-02T00:00:00Z", "open": 11, "high": 13, "low": 10.5, "close": 12.5}
    ]})
}

fn success(dataset: Dataset) -> Outcome {
    match dataset {
        Dataset::Candlestick => Ok(candlestick_body()),
        _ => Ok(series_body()),
    }
}

fn server_error() -> Outcome {
    Err(FetchError::Status {
        status: 500,
        body: "Internal Server Error".to_string(),
    })
}

async fn wait_for_settled(view: &DashboardView, count: usize) {
    let mut rx = view.subscribe();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|n| *n >= count))
        .await
        .expect("slots did not settle in time")
        .unwrap();
}

fn permutations(items: &[Dataset]) -> Vec<Vec<Dataset>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}

#[tokio::test]
async fn test_nothing_rendered_before_any_fetch_settles() {
    let (source, _controls) = ScriptedSource::new();
    let view = DashboardView::mount(source);

    let snapshot = view.snapshot();
    assert_eq!(view.settled_count(), 0);
    for (_, section) in snapshot.sections() {
        assert_eq!(section, SectionView::Nothing);
    }
    for dataset in Dataset::ALL {
        assert!(view.slot(dataset).is_empty());
    }
}

#[tokio::test]
async fn test_all_datasets_ready() {
    let (source, mut controls) = ScriptedSource::new();
    let view = DashboardView::mount(source.clone());

    for dataset in Dataset::ALL {
        controls.resolve(dataset, success(dataset));
    }
    view.settled().await;

    let series = SeriesPayload {
        labels: vec!["Jan".into(), "Feb".into(), "Mar".into()],
        data: vec![65.0, 59.0, 80.0],
    };
    assert_eq!(view.slot(Dataset::Line), Slot::Ready(ChartPayload::Series(line_chart(series.clone()))));
    assert_eq!(view.slot(Dataset::Bar), Slot::Ready(ChartPayload::Series(bar_chart(series.clone()))));
    assert_eq!(view.slot(Dataset::Pie), Slot::Ready(ChartPayload::Series(pie_chart(series))));
    assert_eq!(
        view.slot(Dataset::Candlestick),
        Slot::Ready(ChartPayload::Candlestick(vec![
            CandlestickPoint { x: 1_704_067_200_000, y: [10.0, 12.0, 9.0, 11.0] },
            CandlestickPoint { x: 1_704_153_600_000, y: [11.0, 13.0, 10.5, 12.5] },
        ]))
    );

    for dataset in Dataset::ALL {
        assert_eq!(source.calls(dataset), 1);
    }
}

#[tokio::test]
async fn test_bar_failure_isolated_in_every_order() {
    for order in permutations(&Dataset::ALL) {
        let (source, mut controls) = ScriptedSource::new();
        let view = DashboardView::mount(source);

        for (settled, dataset) in order.iter().enumerate() {
            let outcome = if *dataset == Dataset::Bar {
                server_error()
            } else {
                success(*dataset)
            };
            controls.resolve(*dataset, outcome);
            wait_for_settled(&view, settled + 1).await;

            // Settled slots never change once later ones arrive
            for earlier in &order[..=settled] {
                assert!(view.slot(*earlier).is_settled(), "order {:?}", order);
            }
            for later in &order[settled + 1..] {
                assert!(view.slot(*later).is_empty(), "order {:?}", order);
            }
        }

        let snapshot = view.snapshot();
        let charts = snapshot
            .sections()
            .filter(|(_, s)| matches!(s, SectionView::Chart { .. } | SectionView::Candlestick { .. }))
            .count();
        assert_eq!(charts, 3, "order {:?}", order);
        assert_eq!(
            snapshot.slot(Dataset::Bar),
            &Slot::Failed("Failed to load Bar Chart data.".to_string())
        );
    }
}

#[tokio::test]
async fn test_final_state_independent_of_order() {
    let mut snapshots = Vec::new();

    for order in permutations(&Dataset::ALL) {
        let (source, mut controls) = ScriptedSource::new();
        let view = DashboardView::mount(source);

        for dataset in order {
            controls.resolve(dataset, success(dataset));
        }
        view.settled().await;
        snapshots.push(view.snapshot());
    }

    assert_eq!(snapshots.len(), 24);
    assert!(snapshots.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_every_failure_kind_yields_fixed_message() {
    let (source, mut controls) = ScriptedSource::new();
    let view = DashboardView::mount(source);

    controls.resolve(Dataset::Line, server_error());
    controls.resolve(Dataset::Bar, Ok(json!({"labels": ["a"]})));
    controls.resolve(Dataset::Pie, Ok(json!("not an object")));
    controls.resolve(
        Dataset::Candlestick,
        Ok(json!({"data": [{"x": "someday", "open": 1, "high": 2, "low": 0, "close": 1}]})),
    );
    view.settled().await;

    for dataset in Dataset::ALL {
        let slot = view.slot(dataset);
        assert_eq!(slot.error(), Some(dataset.error_message()));
        assert!(slot.ready().is_none());
    }
}

#[tokio::test]
async fn test_hung_request_leaves_section_empty() {
    let (source, mut controls) = ScriptedSource::new();
    let view = DashboardView::mount(source);

    controls.hang(Dataset::Pie);
    for dataset in [Dataset::Line, Dataset::Bar, Dataset::Candlestick] {
        controls.resolve(dataset, success(dataset));
    }
    wait_for_settled(&view, 3).await;

    let all = tokio::time::timeout(Duration::from_millis(100), view.settled()).await;
    assert!(all.is_err());

    assert!(view.slot(Dataset::Pie).is_empty());
    assert!(view.snapshot().sections().any(|(d, s)| d == Dataset::Pie && s.is_nothing()));
    assert!(!view.snapshot().is_settled());
}

/// Counts ERROR events seen by the thread's subscriber
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_errors() -> (ErrorCounter, tracing::subscriber::DefaultGuard) {
    let counter = ErrorCounter::default();
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));
    (counter, guard)
}

#[tokio::test]
async fn test_failure_while_mounted_logs_error() {
    let (errors, _guard) = count_errors();
    let (source, mut controls) = ScriptedSource::new();
    let view = DashboardView::mount(source);

    controls.resolve(Dataset::Bar, server_error());
    wait_for_settled(&view, 1).await;

    assert_eq!(errors.count(), 1);
    assert!(view.slot(Dataset::Bar).is_failed());
}

#[tokio::test]
async fn test_unmount_before_settle_discards_results() {
    let (errors, _guard) = count_errors();
    let (source, mut controls) = ScriptedSource::new();
    let view = DashboardView::mount(source.clone());

    controls.resolve(Dataset::Line, success(Dataset::Line));
    wait_for_settled(&view, 1).await;

    let tasks = view.unmount();
    assert_eq!(tasks.len(), 4);

    controls.resolve(Dataset::Bar, server_error());
    controls.resolve(Dataset::Pie, success(Dataset::Pie));
    controls.resolve(Dataset::Candlestick, Ok(json!({"labels": ["wrong shape"]})));

    for task in tasks {
        let joined = tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("late fetch did not complete");
        assert!(joined.is_ok(), "load task panicked: {:?}", joined);
    }

    assert_eq!(source.returned.load(Ordering::SeqCst), 4);
    assert_eq!(errors.count(), 0);
}
