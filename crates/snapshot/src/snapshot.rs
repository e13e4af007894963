//! Whole-ledger retrieval: header, transactions, then the state tree.

use crate::error::SnapshotResult;
use crate::format::FormatConfig;
use crate::observer::SnapshotObserver;
use crate::pager::StatePager;
use crate::serializer::DocumentWriter;
use ledger_rpc_client::LedgerSource;
use std::io::Write;
use tracing::info;

/// What a completed run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub sequence: u32,
    /// Transaction count, or `None` when the ledger has none to fetch.
    pub transactions: Option<usize>,
    pub state_entries: u64,
    pub pages: u64,
}

/// Retrieves ledger `seq` from `source` and writes it to `out` as one
/// document, returning the summary and the flushed sink.
///
/// Requests run strictly one after another. The document is opened before
/// the first request, so a failed run leaves whatever was already written.
pub async fn fetch_snapshot<S, W, O>(
    source: &S,
    seq: u32,
    out: W,
    format: FormatConfig,
    observer: &mut O,
) -> SnapshotResult<(SnapshotSummary, W)>
where
    S: LedgerSource + ?Sized,
    W: Write,
    O: SnapshotObserver + ?Sized,
{
    info!(target: "ledger", seq, format = %format.mode(), "snapshot started");
    let mut document = DocumentWriter::begin(out, format)?;

    let header = source.fetch_header(seq).await?;
    info!(target: "ledger", seq, "header fetched");
    document.write_ledger(&header)?;
    observer.header_fetched(&header);

    let transactions = if header.has_transactions() {
        let transactions = source.fetch_transactions(seq).await?;
        document.write_transactions(&transactions)?;
        info!(target: "ledger", seq, count = transactions.len(), "transactions fetched");
        observer.transactions_fetched(transactions.len());
        Some(transactions.len())
    } else {
        info!(target: "ledger", seq, "ledger has no transactions");
        observer.no_transactions();
        None
    };

    observer.state_started();
    let mut state = document.begin_state()?;
    let report = StatePager::new(source, seq).run(&mut state, observer).await?;
    let out = state.finish()?;
    info!(
        target: "ledger",
        seq,
        entries = report.entries,
        pages = report.pages,
        "state tree written"
    );
    observer.state_finished(report.entries);

    Ok((
        SnapshotSummary {
            sequence: seq,
            transactions,
            state_entries: report.entries,
            pages: report.pages,
        },
        out,
    ))
}
