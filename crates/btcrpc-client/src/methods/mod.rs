//! Typed method tables, one module per namespace.
//!
//! Each namespace is declared once with [`rpc_namespace!`] and expands to
//! two views over the same table:
//!
//! - the live view (`Blockchain<'c>` etc.), whose async methods send one
//!   request each through the [`RpcClient`](crate::RpcClient);
//! - the recording view (`BlockchainBatch<'r>` etc.), whose methods take the
//!   same arguments but only record the call and return its [`CallId`].
//!
//! Optional arguments are `Option`s. `None` goes out as `null` in its
//! position so the node applies its own default; later arguments keep
//! their positions.
//!
//! [`CallId`]: btcrpc_core::CallId

use btcrpc_core::Param;
use serde::Serialize;

/// Serialize the positional arguments of a table entry.
///
/// Without an explicit list the method's own arguments are sent in order.
/// An explicit list maps them onto the wire positions, e.g. to fill a
/// dummy slot.
macro_rules! wire_params {
    ([$($arg:expr),*]) => {
        [$(btcrpc_core::Param::from_serialize(&$arg)),*]
    };
    ([$($arg:expr),*] [$($param:expr),*]) => {
        [$(btcrpc_core::Param::from_serialize(&$param)),*]
    };
}

/// Declare a namespace: its live view, its recording view, `NAME` and
/// `METHODS`.
///
/// ```ignore
/// rpc_namespace! {
///     /// Doc for the live view.
///     namespace "blockchain" => Blockchain, BlockchainBatch {
///         /// Doc for both methods.
///         fn get_block_hash(height: u64) -> String => "getblockhash";
///         fn prioritise_transaction(txid: &str, fee_delta: i64) -> bool
///             => "prioritisetransaction" [txid, None::<u8>, fee_delta];
///     }
/// }
/// ```
macro_rules! rpc_namespace {
    (
        $(#[doc = $ndoc:literal])*
        namespace $ns:literal => $live:ident, $batch:ident {
            $(
                $(#[doc = $doc:literal])*
                fn $fname:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty
                    => $wire:literal $([$($param:expr),* $(,)?])?;
            )*
        }
    ) => {
        #[allow(unused_imports)]
        use serde_json::Value;

        /// Namespace name.
        pub const NAME: &str = $ns;

        /// Remote method names in this namespace, in declaration order.
        pub const METHODS: &[&str] = &[$($wire),*];

        $(#[doc = $ndoc])*
        #[derive(Clone, Copy)]
        pub struct $live<'c> {
            client: &'c crate::client::RpcClient,
        }

        impl<'c> $live<'c> {
            pub(crate) fn new(client: &'c crate::client::RpcClient) -> Self {
                Self { client }
            }

            /// Namespace name.
            pub fn name(&self) -> &'static str {
                NAME
            }

            $(
                $(#[doc = $doc])*
                #[doc = ""]
                #[doc = concat!("Sends `", $wire, "`.")]
                pub async fn $fname(
                    &self,
                    $($arg: $ty),*
                ) -> Result<$ret, crate::errors::ClientError> {
                    let params = crate::methods::collect_params(
                        wire_params!([$($arg),*] $([$($param),*])?),
                    )
                    .map_err(|source| crate::errors::ClientError::Params {
                        method: $wire.to_string(),
                        source,
                    })?;
                    self.client.call($wire, params).await
                }
            )*
        }

        #[doc = concat!("Recording view of the `", $ns, "` namespace.")]
        ///
        /// Same methods and arguments as the live view; each call is added
        /// to the batch under recording and returns its id.
        #[derive(Clone, Copy)]
        pub struct $batch<'r> {
            recorder: &'r crate::batch::recorder::Recorder,
        }

        impl<'r> $batch<'r> {
            pub(crate) fn new(recorder: &'r crate::batch::recorder::Recorder) -> Self {
                Self { recorder }
            }

            /// Namespace name.
            pub fn name(&self) -> &'static str {
                NAME
            }

            $(
                $(#[doc = $doc])*
                #[doc = ""]
                #[doc = concat!("Records `", $wire, "`.")]
                pub fn $fname(&self, $($arg: $ty),*) -> btcrpc_core::CallId {
                    self.recorder.record(
                        $wire,
                        crate::methods::collect_params(
                            wire_params!([$($arg),*] $([$($param),*])?),
                        ),
                    )
                }
            )*
        }
    };
}

pub mod blockchain;
pub mod control;
pub mod generating;
pub mod mining;
pub mod network;
pub mod raw_transactions;
pub mod util;
pub mod wallet;

pub use blockchain::{Blockchain, BlockchainBatch};
pub use control::{Control, ControlBatch};
pub use generating::{Generating, GeneratingBatch};
pub use mining::{Mining, MiningBatch};
pub use network::{Network, NetworkBatch};
pub use raw_transactions::{RawTransactions, RawTransactionsBatch};
pub use util::{Util, UtilBatch};
pub use wallet::{Wallet, WalletBatch};

/// Every namespace with its remote method names.
pub const NAMESPACES: [(&str, &[&str]); 8] = [
    (blockchain::NAME, blockchain::METHODS),
    (control::NAME, control::METHODS),
    (generating::NAME, generating::METHODS),
    (mining::NAME, mining::METHODS),
    (network::NAME, network::METHODS),
    (raw_transactions::NAME, raw_transactions::METHODS),
    (util::NAME, util::METHODS),
    (wallet::NAME, wallet::METHODS),
];

/// Namespace that declares `method`, if any.
pub fn namespace_of(method: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(_, methods)| methods.contains(&method))
        .map(|(name, _)| *name)
}

/// A block addressed by hash or by height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockRef<'a> {
    /// Block hash, hex.
    Hash(&'a str),
    /// Block height.
    Height(u64),
}

impl<'a> From<&'a str> for BlockRef<'a> {
    fn from(hash: &'a str) -> Self {
        Self::Hash(hash)
    }
}

impl From<u64> for BlockRef<'_> {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

pub(crate) fn collect_params<const N: usize>(
    params: [serde_json::Result<Param>; N],
) -> serde_json::Result<Vec<Param>> {
    params.into_iter().collect()
}
