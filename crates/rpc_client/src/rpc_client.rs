use crate::error::{LedgerFault, LedgerResult};
use crate::models::RpcRequest;
use crate::transport::{HttpTransport, RpcTransport};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Status string every successful envelope carries.
const SUCCESS_STATUS: &str = "success";

/// The RPC client to call ledger server methods.
///
/// One call is one round trip. Failures are classified and returned; there
/// is no retry because the servers are best effort and a failed run is
/// simply re-run by the operator.
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn RpcTransport>,
}

impl RpcClient {
    /// Creates a client over any transport.
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Creates an HTTP client for `endpoint`.
    pub fn http(endpoint: &str) -> LedgerResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::parse(endpoint)?)))
    }

    /// Sends `method` with a single parameter object and returns the whole
    /// decoded response, so callers can reach nested fields under `result`.
    pub async fn query(&self, method: &str, params: Map<String, Value>) -> LedgerResult<Value> {
        let request = RpcRequest::new(method, params);
        let body = request.to_body().map_err(|e| {
            LedgerFault::protocol(format!("failed to encode {method} request: {e}"))
        })?;

        debug!(target: "ledger", method, "rpc call");
        let content = self.transport.post(body).await?;

        Self::as_rpc_response(&content).map_err(|fault| {
            warn!(target: "ledger", method, error = %fault, "rpc call failed");
            fault
        })
    }

    /// Decodes a response body and checks the envelope.
    fn as_rpc_response(content: &str) -> LedgerResult<Value> {
        let root: Value = serde_json::from_str(content)?;

        let Some(result) = root.get("result").filter(|result| result.is_object()) else {
            return Err(LedgerFault::protocol("result not object"));
        };

        let status = result.get("status").and_then(Value::as_str).unwrap_or_default();
        if status != SUCCESS_STATUS {
            return Err(LedgerFault::Service {
                status: status.to_string(),
                payload: result.clone(),
            });
        }

        Ok(root)
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient").finish_non_exhaustive()
    }
}
