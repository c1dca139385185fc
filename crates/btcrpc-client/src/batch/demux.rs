//! Response demultiplexer.
//!
//! Matches responses to calls by id, never by position: nodes may answer
//! a batch in any order. Any deviation from exactly one response per call
//! fails the whole batch.

use std::collections::{HashMap, HashSet};

use btcrpc_core::{CallError, CallId, RpcRequest, RpcResponse};
use tracing::warn;

use super::CallOutcome;
use crate::errors::BatchError;

/// Pair every request with its response and return the outcomes in
/// request order.
pub(crate) fn demultiplex(
    requests: &[RpcRequest],
    responses: Vec<RpcResponse>,
) -> Result<Vec<CallOutcome>, BatchError> {
    let expected: HashSet<u64> = requests.iter().map(|r| r.id).collect();
    let mut by_id: HashMap<u64, RpcResponse> = HashMap::with_capacity(responses.len());

    for response in responses {
        let Some(id) = response.id.filter(|id| expected.contains(id)) else {
            warn!(id = ?response.id, "response does not match any call in the batch");
            return Err(BatchError::UnexpectedResponse { id: response.id });
        };
        if by_id.insert(id, response).is_some() {
            warn!(id, "duplicate response in batch");
            return Err(BatchError::DuplicateResponse { id: CallId::new(id) });
        }
    }

    requests
        .iter()
        .map(|request| {
            let id = CallId::new(request.id);
            let Some(response) = by_id.remove(&request.id) else {
                warn!(%id, method = %request.method, "no response for call");
                return Err(BatchError::MissingResponse { id });
            };
            Ok(response
                .into_outcome()
                .map_err(|payload| CallError::from_payload(id, payload)))
        })
        .collect()
}
