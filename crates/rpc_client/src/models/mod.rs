//! Wire and domain models for the ledger RPC methods.

mod ledger_header;
mod rpc_request;
mod state_page;

pub use ledger_header::{LedgerHeader, EMPTY_TRANSACTION_HASH};
pub use rpc_request::RpcRequest;
pub use state_page::{Marker, StatePage};
