//! Ledger RPC Client Library
//!
//! JSON-RPC client for full-history ledger servers: one request per call,
//! envelope classification, and typed accessors for ledger headers,
//! transactions and paginated state-tree pages.

mod error;
mod ledger_api;
pub mod models;
mod rpc_client;
mod transport;

pub use error::{LedgerFault, LedgerResult};
pub use ledger_api::{LedgerApi, LedgerSource};
pub use rpc_client::RpcClient;
pub use transport::{HttpTransport, RpcTransport, DEFAULT_ENDPOINT};

// Re-export commonly used types
pub use models::{LedgerHeader, Marker, RpcRequest, StatePage, EMPTY_TRANSACTION_HASH};
