//! Stage notifications for a snapshot run.

use ledger_rpc_client::LedgerHeader;

/// Progress after one state page has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based page number.
    pub page: u64,
    /// Entries in this page.
    pub page_entries: usize,
    /// Entries written so far, this page included.
    pub total_entries: u64,
    /// Estimated completion in units of [`crate::PROGRESS_UNITS`].
    pub units: u64,
}

/// Callbacks invoked as a snapshot run moves through its stages.
///
/// All methods default to doing nothing.
pub trait SnapshotObserver {
    fn header_fetched(&mut self, _header: &LedgerHeader) {}

    fn transactions_fetched(&mut self, _count: usize) {}

    /// The header's transaction hash says the ledger has no transactions.
    fn no_transactions(&mut self) {}

    fn state_started(&mut self) {}

    fn page_received(&mut self, _progress: &PageProgress) {}

    fn state_finished(&mut self, _entries: u64) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SnapshotObserver for NoopObserver {}
