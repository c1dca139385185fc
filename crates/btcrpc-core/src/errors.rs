//! Per-call error value and the node's error-code taxonomy.
//!
//! A failed call never becomes a distinct error type per code. It becomes
//! one [`CallError`] carrying the raw payload, and callers match on
//! [`CallError::kind`] when they need to branch on the code.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::envelope::RpcErrorPayload;
use crate::ids::CallId;

// ─────────────────────────────────────────────────────────────────────────────
// Error kinds
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! define_error_kinds {
    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident => $code:literal
        ),* $(,)?
    ) => {
        /// Classification of a JSON-RPC / Bitcoin Core error code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum RpcErrorKind {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
            /// Any code not listed above.
            Other(i64),
        }

        impl RpcErrorKind {
            /// Classify a numeric code.
            #[must_use]
            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Other(other),
                }
            }

            /// The numeric code for this kind.
            #[must_use]
            pub fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Other(code) => code,
                }
            }
        }
    };
}

define_error_kinds! {
    // Standard JSON-RPC
    /// Invalid JSON was received.
    ParseError => -32700,
    /// The request object is not valid.
    InvalidRequest => -32600,
    /// Method does not exist.
    MethodNotFound => -32601,
    /// Invalid method parameters.
    InvalidParams => -32602,
    /// Internal JSON-RPC error.
    InternalError => -32603,

    // General
    /// Exception thrown in command handling.
    Misc => -1,
    /// Unexpected type was passed as parameter.
    Type => -3,
    /// Invalid address or key.
    InvalidAddressOrKey => -5,
    /// Ran out of memory during operation.
    OutOfMemory => -7,
    /// Invalid, missing or duplicate parameter.
    InvalidParameter => -8,
    /// Database error.
    Database => -20,
    /// Error parsing or validating structure in raw format.
    Deserialization => -22,
    /// General error during transaction or block submission.
    Verify => -25,
    /// Transaction or block was rejected by network rules.
    VerifyRejected => -26,
    /// Transaction already in chain.
    VerifyAlreadyInChain => -27,
    /// Client still warming up.
    InWarmup => -28,
    /// RPC method is deprecated.
    MethodDeprecated => -32,

    // P2P client
    /// Node is not connected.
    ClientNotConnected => -9,
    /// Still downloading initial blocks.
    ClientInInitialDownload => -10,
    /// Node is already added.
    ClientNodeAlreadyAdded => -23,
    /// Node has not been added before.
    ClientNodeNotAdded => -24,
    /// Node to disconnect not found in connected nodes.
    ClientNodeNotConnected => -29,
    /// Invalid IP/subnet.
    ClientInvalidIpOrSubnet => -30,
    /// No valid connection manager instance found.
    ClientP2pDisabled => -31,

    // Wallet
    /// Unspecified problem with wallet.
    Wallet => -4,
    /// Not enough funds in wallet or account.
    WalletInsufficientFunds => -6,
    /// Invalid label name.
    WalletInvalidLabelName => -11,
    /// Keypool ran out.
    WalletKeypoolRanOut => -12,
    /// Enter the wallet passphrase first.
    WalletUnlockNeeded => -13,
    /// The wallet passphrase entered was incorrect.
    WalletPassphraseIncorrect => -14,
    /// Command given in wrong wallet encryption state.
    WalletWrongEncState => -15,
    /// Failed to encrypt the wallet.
    WalletEncryptionFailed => -16,
    /// Wallet is already unlocked.
    WalletAlreadyUnlocked => -17,
    /// Invalid wallet specified.
    WalletNotFound => -18,
    /// No wallet specified (multiple wallets loaded).
    WalletNotSpecified => -19,
    /// This same wallet is already loaded.
    WalletAlreadyLoaded => -35,
    /// A wallet with this name already exists.
    WalletAlreadyExists => -36,
}

impl RpcErrorKind {
    /// Whether this code comes from the wallet subsystem.
    #[must_use]
    pub fn is_wallet(self) -> bool {
        matches!(
            self,
            Self::Wallet
                | Self::WalletInsufficientFunds
                | Self::WalletInvalidLabelName
                | Self::WalletKeypoolRanOut
                | Self::WalletUnlockNeeded
                | Self::WalletPassphraseIncorrect
                | Self::WalletWrongEncState
                | Self::WalletEncryptionFailed
                | Self::WalletAlreadyUnlocked
                | Self::WalletNotFound
                | Self::WalletNotSpecified
                | Self::WalletAlreadyLoaded
                | Self::WalletAlreadyExists
        )
    }
}

impl fmt::Display for RpcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "Other({code})"),
            kind => write!(f, "{kind:?}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Call error
// ─────────────────────────────────────────────────────────────────────────────

/// A remote call that the node answered with an error.
///
/// Inside a batch this occupies exactly the failed call's slot; sibling
/// calls keep their own results.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("rpc call {id} failed with code {code}: {message}")]
pub struct CallError {
    /// Id of the request that failed.
    pub id: CallId,
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message from the node.
    pub message: String,
    /// Structured detail attached by the node, if any.
    pub data: Option<Value>,
}

impl CallError {
    /// Rebuild the error from the raw payload of the response for `id`.
    #[must_use]
    pub fn from_payload(id: CallId, payload: RpcErrorPayload) -> Self {
        Self {
            id,
            code: payload.code,
            message: payload.message,
            data: payload.data,
        }
    }

    /// Classification of the error code.
    #[must_use]
    pub fn kind(&self) -> RpcErrorKind {
        RpcErrorKind::from_code(self.code)
    }

    /// The raw payload, as received.
    #[must_use]
    pub fn payload(&self) -> RpcErrorPayload {
        RpcErrorPayload {
            code: self.code,
            message: self.message.clone(),
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    // ── RpcErrorKind ────────────────────────────────────────────────

    #[test]
    fn known_codes_classify() {
        assert_eq!(RpcErrorKind::from_code(-8), RpcErrorKind::InvalidParameter);
        assert_eq!(RpcErrorKind::from_code(-32601), RpcErrorKind::MethodNotFound);
        assert_eq!(RpcErrorKind::from_code(-28), RpcErrorKind::InWarmup);
        assert_eq!(RpcErrorKind::from_code(-18), RpcErrorKind::WalletNotFound);
    }

    #[test]
    fn unknown_code_is_other() {
        assert_eq!(RpcErrorKind::from_code(-999), RpcErrorKind::Other(-999));
        assert_eq!(RpcErrorKind::Other(-999).code(), -999);
    }

    #[test]
    fn code_round_trips_for_named_kinds() {
        for code in [-32700, -32603, -1, -5, -8, -25, -26, -27, -4, -6, -13, -35, -36] {
            let kind = RpcErrorKind::from_code(code);
            assert!(!matches!(kind, RpcErrorKind::Other(_)), "{code} should be named");
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn wallet_grouping() {
        assert!(RpcErrorKind::WalletUnlockNeeded.is_wallet());
        assert!(RpcErrorKind::from_code(-6).is_wallet());
        assert!(!RpcErrorKind::InvalidParameter.is_wallet());
        assert!(!RpcErrorKind::Other(-4000).is_wallet());
    }

    #[test]
    fn serde_uses_variant_names() {
        let v = serde_json::to_value(RpcErrorKind::WalletNotFound).unwrap();
        assert_eq!(v, json!("WalletNotFound"));
        let back: RpcErrorKind = serde_json::from_value(json!({"Other": -3000})).unwrap();
        assert_matches!(back, RpcErrorKind::Other(-3000));
    }

    #[test]
    fn kind_display() {
        assert_eq!(RpcErrorKind::Verify.to_string(), "Verify");
        assert_eq!(RpcErrorKind::Other(-77).to_string(), "Other(-77)");
    }

    // ── CallError ───────────────────────────────────────────────────

    #[test]
    fn from_payload_keeps_everything() {
        let payload = RpcErrorPayload {
            code: -8,
            message: "bad".into(),
            data: Some(json!({"arg": 1})),
        };
        let err = CallError::from_payload(CallId::new(1), payload.clone());
        assert_eq!(err.id, CallId::new(1));
        assert_eq!(err.code, -8);
        assert_eq!(err.kind(), RpcErrorKind::InvalidParameter);
        assert_eq!(err.payload(), payload);
    }

    #[test]
    fn display_mentions_id_and_code() {
        let err = CallError {
            id: CallId::new(4),
            code: -5,
            message: "Invalid address".into(),
            data: None,
        };
        assert_eq!(err.to_string(), "rpc call 4 failed with code -5: Invalid address");
    }
}
