//! # btcrpc-client
//!
//! Bitcoin Core JSON-RPC client.
//!
//! - **Live calls**: [`RpcClient`] groups the node's methods into eight
//!   namespaces (`blockchain`, `control`, `generating`, `mining`, `network`,
//!   `raw_transactions`, `util`, `wallet`); each method sends one request.
//! - **Batches**: [`RpcClient::batch`] hands a [`BatchView`] with the same
//!   namespaces and method names to a recording callback. Calls made through
//!   it are captured instead of sent, packed into one batch request, and
//!   the per-call outcomes come back in recording order.
//! - **Transport**: the [`Transport`] trait, implemented over HTTP by
//!   [`HttpTransport`].
//!
//! ```no_run
//! # async fn demo(client: btcrpc_client::RpcClient) -> Result<(), btcrpc_client::BatchError> {
//! let outcomes = client
//!     .batch(|b| {
//!         vec![
//!             b.blockchain.get_block_count(),
//!             b.blockchain.get_block_hash(0),
//!             b.wallet.get_balance(None, None, None, None),
//!         ]
//!     })
//!     .await?;
//! assert_eq!(outcomes.len(), 3);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod batch;
pub mod client;
pub mod errors;
pub mod methods;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use batch::{
    BatchPhase, BatchView, CallOutcome, PreparedBatch, RecordingOutcome, decode_outcome,
};
pub use client::RpcClient;
pub use errors::{BatchError, ClientError, TransportError};
pub use methods::{BlockRef, NAMESPACES, namespace_of};
pub use transport::{HttpTransport, Transport};

pub use btcrpc_core::{CallError, CallId, Param, RpcErrorKind};
