//! HTTP transport for JSON-RPC requests.

use crate::error::{LedgerFault, LedgerResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

/// Public full-history cluster queried when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://s2.ripple.com:51234";

/// One request/response exchange with a ledger server.
///
/// Implementations return the raw response body. Anything that keeps the
/// round trip from completing is a [`LedgerFault::Transport`].
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// POSTs `body` and returns the full response body.
    async fn post(&self, body: String) -> LedgerResult<String>;
}

/// `reqwest`-backed transport bound to a single endpoint.
///
/// The response body is read into a growable buffer. Timeouts are whatever
/// the underlying client uses; none are added here.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport for `endpoint` with a default HTTP client.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Creates a transport with an existing HTTP client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self {
            endpoint,
            http_client: client,
        }
    }

    /// Parses `endpoint` and creates a transport for it.
    pub fn parse(endpoint: &str) -> LedgerResult<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| LedgerFault::transport(format!("invalid endpoint '{endpoint}': {e}")))?;
        Ok(Self::new(url))
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, body: String) -> LedgerResult<String> {
        debug!(target: "ledger", endpoint = %self.endpoint, bytes = body.len(), "posting request");

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| LedgerFault::transport(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerFault::transport(format!("HTTP status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| LedgerFault::transport(format!("Failed to read response: {e}")))
    }
}
