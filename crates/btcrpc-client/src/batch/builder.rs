//! Batch request builder.
//!
//! Collects recorded calls, assigns ids from 0 in recording order, and
//! turns them into request envelopes exactly once.

use btcrpc_core::{CallId, Param, RpcRequest};

/// A call captured during recording.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingCall {
    pub(crate) id: CallId,
    pub(crate) method: String,
    pub(crate) params: Vec<Param>,
}

/// Accumulates calls for one batch. Consumed by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub(crate) struct RequestBuilder {
    next_id: CallId,
    calls: Vec<PendingCall>,
}

impl RequestBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a call and return the id it will be sent with.
    pub(crate) fn push(&mut self, method: &str, params: Vec<Param>) -> CallId {
        let id = self.next_id;
        self.next_id = id.next();
        self.calls.push(PendingCall {
            id,
            method: method.to_string(),
            params,
        });
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.calls.len()
    }

    /// Envelopes in id order, with unset parameters written as `null`.
    pub(crate) fn finish(self) -> Vec<RpcRequest> {
        self.calls
            .into_iter()
            .map(|call| RpcRequest::new(call.id.as_u64(), call.method, call.params))
            .collect()
    }
}
