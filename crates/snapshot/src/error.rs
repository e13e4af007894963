//! Error types for snapshot runs.

use ledger_rpc_client::LedgerFault;
use std::io;
use thiserror::Error;

/// Errors that end a snapshot run.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// A ledger request failed.
    #[error("query failed: {0}")]
    Fetch(#[from] LedgerFault),

    /// Writing the output document failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// A value could not be encoded.
    #[error("encoding error: {0}")]
    Encode(serde_json::Error),
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Output(err.into())
        } else {
            Self::Encode(err)
        }
    }
}

impl SnapshotError {
    /// The ledger fault behind this error, if it came from a request.
    pub fn fault(&self) -> Option<&LedgerFault> {
        match self {
            Self::Fetch(fault) => Some(fault),
            _ => None,
        }
    }
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;
