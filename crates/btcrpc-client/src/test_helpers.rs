//! Scripted transport for unit tests.

use async_trait::async_trait;
use btcrpc_core::{RpcRequest, RpcResponse};
use parking_lot::Mutex;
use serde_json::Value;

use crate::errors::TransportError;
use crate::transport::Transport;

type SingleHandler = Box<dyn Fn(&RpcRequest) -> Result<RpcResponse, TransportError> + Send + Sync>;
type BatchHandler =
    Box<dyn Fn(&[RpcRequest]) -> Result<Vec<RpcResponse>, TransportError> + Send + Sync>;

/// Transport answering from closures and recording everything it was sent.
pub(crate) struct MockTransport {
    single: SingleHandler,
    batch: BatchHandler,
    singles: Mutex<Vec<RpcRequest>>,
    batches: Mutex<Vec<Vec<RpcRequest>>>,
}

impl MockTransport {
    /// Answer every request, single or batched, with `f`. Batches are
    /// answered in request order.
    pub(crate) fn answering<F>(f: F) -> Self
    where
        F: Fn(&RpcRequest) -> RpcResponse + Send + Sync + Clone + 'static,
    {
        let g = f.clone();
        Self::scripted(
            move |req| Ok(f(req)),
            move |reqs| Ok(reqs.iter().map(&g).collect()),
        )
    }

    /// Answer every request with its method name as the result.
    pub(crate) fn echo() -> Self {
        Self::answering(|req| RpcResponse::success(req.id, Value::String(req.method.clone())))
    }

    /// Fail every exchange.
    pub(crate) fn failing() -> Self {
        Self::scripted(
            |_| Err(malformed()),
            |_| Err(malformed()),
        )
    }

    /// Answer batches with `f`; single calls fail.
    pub(crate) fn batch_answering<F>(f: F) -> Self
    where
        F: Fn(&[RpcRequest]) -> Vec<RpcResponse> + Send + Sync + 'static,
    {
        Self::scripted(|_| Err(malformed()), move |reqs| Ok(f(reqs)))
    }

    fn scripted<S, B>(single: S, batch: B) -> Self
    where
        S: Fn(&RpcRequest) -> Result<RpcResponse, TransportError> + Send + Sync + 'static,
        B: Fn(&[RpcRequest]) -> Result<Vec<RpcResponse>, TransportError> + Send + Sync + 'static,
    {
        Self {
            single: Box::new(single),
            batch: Box::new(batch),
            singles: Mutex::new(Vec::new()),
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Single requests received so far.
    pub(crate) fn singles(&self) -> Vec<RpcRequest> {
        self.singles.lock().clone()
    }

    /// Batches received so far.
    pub(crate) fn batches(&self) -> Vec<Vec<RpcRequest>> {
        self.batches.lock().clone()
    }

    /// Number of batch exchanges.
    pub(crate) fn batch_calls(&self) -> usize {
        self.batches.lock().len()
    }
}

fn malformed() -> TransportError {
    TransportError::Malformed {
        message: "scripted failure".into(),
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RpcRequest) -> Result<RpcResponse, TransportError> {
        let result = (self.single)(&request);
        self.singles.lock().push(request);
        result
    }

    async fn send_batch(&self, requests: &[RpcRequest]) -> Result<Vec<RpcResponse>, TransportError> {
        self.batches.lock().push(requests.to_vec());
        (self.batch)(requests)
    }
}
