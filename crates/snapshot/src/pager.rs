//! State-tree pagination.

use crate::error::SnapshotResult;
use crate::observer::{PageProgress, SnapshotObserver};
use crate::progress::{estimate, PROGRESS_UNITS};
use crate::serializer::StateSink;
use ledger_rpc_client::{LedgerSource, Marker};
use tracing::debug;

/// Where the pager is in the traversal.
#[derive(Debug, Clone, PartialEq)]
enum PagerState {
    /// More pages to request; `None` before the first request.
    Fetching(Option<Marker>),
    /// The server returned a page without a marker.
    Done,
}

/// Totals for a completed traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationReport {
    /// Requests made.
    pub pages: u64,
    /// Entries handed to the sink.
    pub entries: u64,
}

/// Walks a ledger's state tree page by page.
///
/// Each page's entries go to the sink in arrival order before the next page
/// is requested, so only one page is held at a time. A page without a marker
/// is the only way the walk ends; empty pages that still carry a marker are
/// followed. Any fault ends the walk with no way to resume.
pub struct StatePager<'a, S: ?Sized> {
    source: &'a S,
    seq: u32,
}

impl<'a, S: LedgerSource + ?Sized> StatePager<'a, S> {
    pub fn new(source: &'a S, seq: u32) -> Self {
        Self { source, seq }
    }

    /// Runs the traversal to completion.
    pub async fn run<K, O>(&self, sink: &mut K, observer: &mut O) -> SnapshotResult<PaginationReport>
    where
        K: StateSink + ?Sized,
        O: SnapshotObserver + ?Sized,
    {
        let mut report = PaginationReport::default();
        let mut state = PagerState::Fetching(None);

        while let PagerState::Fetching(marker) = state {
            let page = self
                .source
                .fetch_state_page(self.seq, marker.as_ref())
                .await?;
            report.pages += 1;

            for entry in &page.entries {
                sink.accept(entry)?;
            }
            report.entries += page.entries.len() as u64;

            let progress = PageProgress {
                page: report.pages,
                page_entries: page.entries.len(),
                total_entries: report.entries,
                units: estimate(page.marker.as_ref(), PROGRESS_UNITS),
            };
            debug!(
                target: "ledger",
                seq = self.seq,
                page = progress.page,
                entries = progress.total_entries,
                "state page written"
            );
            observer.page_received(&progress);

            state = match page.marker {
                Some(next) => PagerState::Fetching(Some(next)),
                None => PagerState::Done,
            };
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ledger_rpc_client::{LedgerFault, LedgerHeader, LedgerResult, StatePage};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct ScriptedPages {
        pages: Mutex<Vec<LedgerResult<StatePage>>>,
        requests: Mutex<Vec<Option<Marker>>>,
    }

    impl ScriptedPages {
        fn new(mut pages: Vec<LedgerResult<StatePage>>) -> Self {
            pages.reverse();
            Self {
                pages: Mutex::new(pages),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LedgerSource for ScriptedPages {
        async fn fetch_header(&self, _seq: u32) -> LedgerResult<LedgerHeader> {
            unreachable!("pager never asks for headers")
        }

        async fn fetch_transactions(&self, _seq: u32) -> LedgerResult<Vec<Value>> {
            unreachable!("pager never asks for transactions")
        }

        async fn fetch_state_page(&self, _seq: u32, marker: Option<&Marker>) -> LedgerResult<StatePage> {
            self.requests.lock().unwrap().push(marker.cloned());
            self.pages.lock().unwrap().pop().expect("no more scripted pages")
        }
    }

    fn page(range: std::ops::Range<u32>, marker: Option<&str>) -> LedgerResult<StatePage> {
        Ok(StatePage {
            entries: range.map(|i| json!({ "index": i })).collect(),
            marker: marker.map(Marker::from),
        })
    }

    #[derive(Default)]
    struct Recorder(Vec<PageProgress>);

    impl SnapshotObserver for Recorder {
        fn page_received(&mut self, progress: &PageProgress) {
            self.0.push(*progress);
        }
    }

    #[tokio::test]
    async fn follows_markers_through_empty_pages() {
        let source = ScriptedPages::new(vec![
            page(0..500, Some("40AA")),
            page(0..0, Some("80BB")),
            page(500..800, None),
        ]);
        let mut sink = Vec::new();
        let mut recorder = Recorder::default();

        let report = StatePager::new(&source, 7)
            .run(&mut sink, &mut recorder)
            .await
            .unwrap();

        assert_eq!(report, PaginationReport { pages: 3, entries: 800 });
        assert_eq!(sink.len(), 800);
        assert!(sink
            .iter()
            .enumerate()
            .all(|(i, e)| e["index"] == json!(i)));

        let requests = source.requests.lock().unwrap().clone();
        assert_eq!(
            requests,
            vec![None, Some(Marker::from("40AA")), Some(Marker::from("80BB"))]
        );

        let units: Vec<_> = recorder.0.iter().map(|p| p.units).collect();
        assert_eq!(units, vec![53 * 64 / 255, 53 * 128 / 255, PROGRESS_UNITS]);
        assert_eq!(recorder.0[1].page_entries, 0);
        assert_eq!(recorder.0[2].total_entries, 800);
    }

    #[tokio::test]
    async fn single_page_without_marker_stops_immediately() {
        let source = ScriptedPages::new(vec![page(0..3, None)]);
        let mut sink = Vec::new();

        let report = StatePager::new(&source, 1)
            .run(&mut sink, &mut crate::NoopObserver)
            .await
            .unwrap();

        assert_eq!(report.pages, 1);
        assert_eq!(source.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fault_mid_traversal_aborts() {
        let source = ScriptedPages::new(vec![
            page(0..2, Some("10")),
            Err(LedgerFault::transport("connection reset")),
            page(2..4, None),
        ]);
        let mut sink = Vec::new();

        let err = StatePager::new(&source, 1)
            .run(&mut sink, &mut crate::NoopObserver)
            .await
            .unwrap_err();

        assert!(matches!(err.fault(), Some(LedgerFault::Transport { .. })));
        assert_eq!(sink.len(), 2);
        assert_eq!(source.requests.lock().unwrap().len(), 2);
    }
}
