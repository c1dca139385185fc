//! Batched calls.
//!
//! A batch session runs in phases:
//!
//! 1. **Recording**: a callback receives a [`BatchView`] and calls methods
//!    on it exactly as on the live client. Nothing is sent; each call is
//!    captured and gets a [`CallId`], 0, 1, 2, … in recording order.
//! 2. **Built**: the captured calls become one array of request envelopes.
//! 3. **Dispatching**: the array is sent in one exchange. An empty batch
//!    is not sent at all.
//! 4. **Demultiplexing**: responses are matched to calls by id, whatever
//!    order the node answered in.
//! 5. **Complete**: one [`CallOutcome`] per call, in recording order.
//!
//! Failures of individual calls are values in the result. The session as
//! a whole fails with a [`BatchError`] when recording fails, the exchange
//! fails, or the node's answer does not hold exactly one response per call.
//!
//! Recording is synchronous and not reentrant: starting another batch from
//! inside a recording callback fails with [`BatchError::NestedRecording`].

pub(crate) mod builder;
pub(crate) mod demux;
pub(crate) mod dispatcher;
pub(crate) mod recorder;

use std::cell::Cell;
use std::fmt;

use btcrpc_core::{CallError, CallId, Param, RpcRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use self::recorder::Recorder;
use crate::client::RpcClient;
use crate::errors::{BatchError, ClientError};
use crate::methods::{
    BlockchainBatch, ControlBatch, GeneratingBatch, MiningBatch, NetworkBatch,
    RawTransactionsBatch, UtilBatch, WalletBatch,
};

/// Result of one call in a batch: the node's result, or its error.
pub type CallOutcome = Result<Value, CallError>;

/// Decode a successful outcome into `T`; a failed one becomes
/// [`ClientError::Rpc`].
pub fn decode_outcome<T: DeserializeOwned>(outcome: CallOutcome) -> Result<T, ClientError> {
    let value = outcome?;
    serde_json::from_value(value).map_err(|source| ClientError::Decode {
        method: "batched call".to_string(),
        source,
    })
}

/// The phase a failed batch session died in, as reported by
/// [`BatchError::phase`](crate::errors::BatchError::phase).
///
/// A session that succeeds passes through all three and ends with one
/// outcome per call; a session is never retried from the phase it failed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchPhase {
    /// The callback was recording calls.
    Recording,
    /// The batch was on the wire.
    Dispatching,
    /// Responses were being matched to calls.
    Demultiplexing,
}

impl fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Recording => "recording",
            Self::Dispatching => "dispatching",
            Self::Demultiplexing => "demultiplexing",
        };
        f.write_str(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording view
// ─────────────────────────────────────────────────────────────────────────────

/// What a recording callback sees: the client's namespaces, recording
/// instead of sending.
pub struct BatchView<'r> {
    /// Chain state, blocks, mempool and UTXO set.
    pub blockchain: BlockchainBatch<'r>,
    /// Node control and introspection.
    pub control: ControlBatch<'r>,
    /// Block generation.
    pub generating: GeneratingBatch<'r>,
    /// Mining.
    pub mining: MiningBatch<'r>,
    /// Peers and network state.
    pub network: NetworkBatch<'r>,
    /// Raw transactions and PSBTs.
    pub raw_transactions: RawTransactionsBatch<'r>,
    /// Stateless utilities.
    pub util: UtilBatch<'r>,
    /// Wallet.
    pub wallet: WalletBatch<'r>,
    client: &'r RpcClient,
    recorder: &'r Recorder,
}

impl<'r> BatchView<'r> {
    fn new(client: &'r RpcClient, recorder: &'r Recorder) -> Self {
        Self {
            blockchain: BlockchainBatch::new(recorder),
            control: ControlBatch::new(recorder),
            generating: GeneratingBatch::new(recorder),
            mining: MiningBatch::new(recorder),
            network: NetworkBatch::new(recorder),
            raw_transactions: RawTransactionsBatch::new(recorder),
            util: UtilBatch::new(recorder),
            wallet: WalletBatch::new(recorder),
            client,
            recorder,
        }
    }

    /// Record a call by name, for methods without a typed entry.
    pub fn call(&self, method: &str, params: Vec<Param>) -> CallId {
        self.recorder.record(method, Ok(params))
    }

    /// Calls recorded so far.
    pub fn len(&self) -> usize {
        self.recorder.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The client this batch belongs to.
    pub fn client(&self) -> &'r RpcClient {
        self.client
    }
}

/// What a recording callback may return.
///
/// `()` and ids mean success. An `Err` aborts the session with
/// [`BatchError::Recording`] and nothing is sent.
pub trait RecordingOutcome {
    /// `Err` with a rendered message when recording should be aborted.
    fn into_outcome(self) -> Result<(), String>;
}

impl RecordingOutcome for () {
    fn into_outcome(self) -> Result<(), String> {
        Ok(())
    }
}

impl RecordingOutcome for CallId {
    fn into_outcome(self) -> Result<(), String> {
        Ok(())
    }
}

impl RecordingOutcome for Vec<CallId> {
    fn into_outcome(self) -> Result<(), String> {
        Ok(())
    }
}

impl<T, E: fmt::Display> RecordingOutcome for Result<T, E> {
    fn into_outcome(self) -> Result<(), String> {
        self.map(drop).map_err(|e| e.to_string())
    }
}

thread_local! {
    static RECORDING: Cell<bool> = const { Cell::new(false) };
}

/// Marks this thread as recording for its lifetime.
struct RecordingGuard;

impl RecordingGuard {
    fn enter() -> Result<Self, BatchError> {
        if RECORDING.with(|flag| flag.replace(true)) {
            return Err(BatchError::NestedRecording);
        }
        Ok(Self)
    }
}

impl Drop for RecordingGuard {
    fn drop(&mut self) {
        RECORDING.with(|flag| flag.set(false));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prepared batch
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded batch, built and ready to send.
pub struct PreparedBatch<'c> {
    client: &'c RpcClient,
    requests: Vec<RpcRequest>,
}

impl PreparedBatch<'_> {
    /// Number of calls.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no calls were recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The request envelopes, in id order.
    pub fn requests(&self) -> &[RpcRequest] {
        &self.requests
    }

    /// Send the batch and return one outcome per call, in recording order.
    pub async fn send(self) -> Result<Vec<CallOutcome>, BatchError> {
        let responses = dispatcher::dispatch(self.client.transport(), &self.requests).await?;
        let outcomes = demux::demultiplex(&self.requests, responses)?;
        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        debug!(calls = outcomes.len(), failed, "batch complete");
        Ok(outcomes)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client entry points
// ─────────────────────────────────────────────────────────────────────────────

impl RpcClient {
    /// Run a recording callback and build its batch without sending it.
    pub fn record<F, R>(&self, record: F) -> Result<PreparedBatch<'_>, BatchError>
    where
        F: FnOnce(&BatchView<'_>) -> R,
        R: RecordingOutcome,
    {
        let _guard = RecordingGuard::enter()?;
        let recorder = Recorder::new();
        let outcome = record(&BatchView::new(self, &recorder)).into_outcome();
        if let Err(message) = outcome {
            debug!(calls = recorder.len(), "recording aborted by callback");
            return Err(BatchError::Recording { message });
        }
        let requests = recorder.finish()?;
        debug!(calls = requests.len(), "batch recorded");
        Ok(PreparedBatch {
            client: self,
            requests,
        })
    }

    /// Record, send and demultiplex a batch in one step.
    ///
    /// Outcomes come back in recording order; the `n`th outcome belongs to
    /// the call that returned `CallId(n)`.
    pub async fn batch<F, R>(&self, record: F) -> Result<Vec<CallOutcome>, BatchError>
    where
        F: FnOnce(&BatchView<'_>) -> R,
        R: RecordingOutcome,
    {
        self.record(record)?.send().await
    }
}
