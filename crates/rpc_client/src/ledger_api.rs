//! Ledger accessors layered on [`RpcClient`].

use crate::error::{LedgerFault, LedgerResult};
use crate::models::{LedgerHeader, Marker, StatePage};
use crate::rpc_client::RpcClient;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Source of ledger data addressed by sequence number.
///
/// [`LedgerApi`] is the network implementation; anything that can replay
/// headers, transactions and state pages can stand in for it.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Fetches the ledger header.
    async fn fetch_header(&self, seq: u32) -> LedgerResult<LedgerHeader>;

    /// Fetches the expanded transactions (with metadata) in server order.
    async fn fetch_transactions(&self, seq: u32) -> LedgerResult<Vec<Value>>;

    /// Fetches one page of the state tree, continuing from `marker`.
    async fn fetch_state_page(&self, seq: u32, marker: Option<&Marker>) -> LedgerResult<StatePage>;
}

/// Ledger methods (`ledger`, `ledger_data`) of a full-history server.
#[derive(Debug, Clone)]
pub struct LedgerApi {
    rpc_client: Arc<RpcClient>,
}

impl LedgerApi {
    /// Creates a new LedgerApi instance
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    fn ledger_params(seq: u32) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("ledger_index".to_string(), Value::from(seq));
        params
    }
}

#[async_trait]
impl LedgerSource for LedgerApi {
    async fn fetch_header(&self, seq: u32) -> LedgerResult<LedgerHeader> {
        let reply = self.rpc_client.query("ledger", Self::ledger_params(seq)).await?;

        match reply.pointer("/result/ledger") {
            Some(Value::Object(fields)) => Ok(LedgerHeader::new(fields.clone())),
            _ => Err(LedgerFault::shape("result.ledger is not an object", reply)),
        }
    }

    async fn fetch_transactions(&self, seq: u32) -> LedgerResult<Vec<Value>> {
        let mut params = Self::ledger_params(seq);
        params.insert("transactions".to_string(), Value::Bool(true));
        params.insert("expand".to_string(), Value::Bool(true));

        let mut reply = self.rpc_client.query("ledger", params).await?;

        match reply.pointer_mut("/result/ledger/transactions") {
            Some(Value::Array(transactions)) => {
                let transactions = std::mem::take(transactions);
                debug!(target: "ledger", seq, count = transactions.len(), "transactions fetched");
                Ok(transactions)
            }
            _ => Err(LedgerFault::shape(
                "result.ledger.transactions is not an array",
                reply,
            )),
        }
    }

    async fn fetch_state_page(&self, seq: u32, marker: Option<&Marker>) -> LedgerResult<StatePage> {
        let mut params = Self::ledger_params(seq);
        params.insert("binary".to_string(), Value::Bool(false));
        if let Some(marker) = marker {
            params.insert("marker".to_string(), marker.as_value().clone());
        }

        let mut reply = self.rpc_client.query("ledger_data", params).await?;
        let Some(Value::Object(result)) = reply.get_mut("result") else {
            return Err(LedgerFault::protocol("result not object"));
        };

        let marker = result.remove("marker").and_then(Marker::from_value);
        let entries = match result.remove("state") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                result.insert("state".to_string(), other);
                return Err(LedgerFault::shape("result.state is not an array", reply));
            }
        };

        debug!(
            target: "ledger",
            seq,
            entries = entries.len(),
            last = marker.is_none(),
            "state page fetched"
        );
        Ok(StatePage { entries, marker })
    }
}
