//! # Ledger Snapshot
//!
//! Retrieves a complete ledger (header, transactions, state tree) from a
//! full-history server and writes it as a single JSON document.
//!
//! The state tree is far too large for one response, so it is paged through
//! with a continuation marker. Every page is written out before the next one
//! is requested, which keeps memory bounded by a single page.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ledger_rpc_client::{LedgerApi, RpcClient, DEFAULT_ENDPOINT};
//! use ledger_snapshot::{fetch_snapshot, FormatConfig, NoopObserver};
//!
//! let api = LedgerApi::new(Arc::new(RpcClient::http(DEFAULT_ENDPOINT)?));
//! let file = BufWriter::new(File::create("ledger.32570")?);
//! let (summary, _) = fetch_snapshot(&api, 32570, file, FormatConfig::PRETTY, &mut NoopObserver).await?;
//! ```

pub mod error;
pub mod format;
pub mod observer;
pub mod pager;
pub mod progress;
pub mod serializer;
mod snapshot;

// Re-exports
pub use error::{SnapshotError, SnapshotResult};
pub use format::{FormatConfig, FormatMode};
pub use observer::{NoopObserver, PageProgress, SnapshotObserver};
pub use pager::{PaginationReport, StatePager};
pub use progress::{estimate, PROGRESS_SCALE, PROGRESS_UNITS};
pub use serializer::{write_value, DocumentWriter, LayoutFormatter, StateSink, StateWriter};
pub use snapshot::{fetch_snapshot, SnapshotSummary};
