//! The client facade.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use btcrpc_core::{CallError, CallId, Param, RpcRequest};
use btcrpc_settings::ClientSettings;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::methods::{
    Blockchain, Control, Generating, Mining, Network, RawTransactions, Util, Wallet,
};
use crate::transport::{HttpTransport, Transport};

/// Bitcoin Core JSON-RPC client.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct RpcClient {
    transport: Arc<dyn Transport>,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Client over an arbitrary transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(0),
        }
    }

    /// Validate settings and build an HTTP client from them.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        settings.validate()?;
        let transport = HttpTransport::from_settings(settings)?;
        info!(endpoint = transport.endpoint(), "rpc client ready");
        Ok(Self::new(Arc::new(transport)))
    }

    /// The underlying transport.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Chain state, blocks, mempool and UTXO set.
    pub fn blockchain(&self) -> Blockchain<'_> {
        Blockchain::new(self)
    }

    /// Node control and introspection.
    pub fn control(&self) -> Control<'_> {
        Control::new(self)
    }

    /// Block generation.
    pub fn generating(&self) -> Generating<'_> {
        Generating::new(self)
    }

    /// Mining.
    pub fn mining(&self) -> Mining<'_> {
        Mining::new(self)
    }

    /// Peers and network state.
    pub fn network(&self) -> Network<'_> {
        Network::new(self)
    }

    /// Raw transactions and PSBTs.
    pub fn raw_transactions(&self) -> RawTransactions<'_> {
        RawTransactions::new(self)
    }

    /// Stateless utilities.
    pub fn util(&self) -> Util<'_> {
        Util::new(self)
    }

    /// Wallet.
    pub fn wallet(&self) -> Wallet<'_> {
        Wallet::new(self)
    }

    /// Send one call by name and decode its result.
    ///
    /// Unset parameters go out as `null` in their positions.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Param>,
    ) -> Result<T, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!(method, id, "rpc call");

        let response = self.transport.send(request).await?;
        match response.id {
            Some(received) if received != id => {
                warn!(method, expected = id, received, "response id mismatch");
                return Err(ClientError::IdMismatch {
                    expected: id,
                    received: Some(received),
                });
            }
            // A null id is only legitimate on an error the node could not attribute.
            None if !response.is_error() => {
                return Err(ClientError::IdMismatch {
                    expected: id,
                    received: None,
                });
            }
            _ => {}
        }

        let value = response
            .into_outcome()
            .map_err(|payload| CallError::from_payload(CallId::new(id), payload))?;
        serde_json::from_value(value).map_err(|source| ClientError::Decode {
            method: method.to_string(),
            source,
        })
    }
}
