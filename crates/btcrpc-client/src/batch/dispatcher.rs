//! Batch dispatcher.

use btcrpc_core::{RpcRequest, RpcResponse};
use tracing::debug;

use crate::errors::TransportError;
use crate::transport::Transport;

/// Send the whole batch in one exchange. An empty batch is not sent.
pub(crate) async fn dispatch(
    transport: &dyn Transport,
    requests: &[RpcRequest],
) -> Result<Vec<RpcResponse>, TransportError> {
    if requests.is_empty() {
        debug!("empty batch, nothing to send");
        return Ok(Vec::new());
    }
    debug!(calls = requests.len(), "dispatching batch");
    let responses = transport.send_batch(requests).await?;
    debug!(responses = responses.len(), "batch answered");
    Ok(responses)
}
