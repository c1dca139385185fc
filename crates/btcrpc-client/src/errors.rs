//! Client error types.
//!
//! Three layers, matching how far a call got:
//! - [`TransportError`]: the exchange with the node failed as a whole
//! - [`ClientError`]: a single live call failed (transport, node error, decode)
//! - [`BatchError`]: a batch session failed as a unit; per-call failures
//!   inside a successful batch are values, not errors

use btcrpc_core::{CallError, CallId};
use btcrpc_settings::SettingsError;
use thiserror::Error;

use crate::batch::BatchPhase;

/// The HTTP exchange with the node failed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, TLS failure, timeout, or body read error.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status and no usable JSON-RPC body.
    #[error("node returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text (empty on auth failures).
        body: String,
    },

    /// The body was not the JSON-RPC payload expected.
    #[error("malformed response: {message}")]
    Malformed {
        /// What could not be decoded.
        message: String,
    },

    /// The configured endpoint cannot be used.
    #[error("invalid endpoint {url}: {message}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        url: String,
        /// Why it was rejected.
        message: String,
    },
}

impl TransportError {
    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// A single live call failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The exchange with the node failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node answered with an error payload.
    #[error(transparent)]
    Rpc(#[from] CallError),

    /// An argument could not be serialized.
    #[error("failed to serialize parameters for {method}: {source}")]
    Params {
        /// Remote method name.
        method: String,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The result did not have the expected shape.
    #[error("failed to decode result of {method}: {source}")]
    Decode {
        /// Remote method name.
        method: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The response answered a different request.
    #[error("response id {received:?} does not match request id {expected}")]
    IdMismatch {
        /// Id that was sent.
        expected: u64,
        /// Id that came back.
        received: Option<u64>,
    },

    /// Settings could not be turned into a client.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// A batch session failed as a whole.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The recording callback reported a failure.
    #[error("recording callback failed: {message}")]
    Recording {
        /// The callback's error, rendered.
        message: String,
    },

    /// A batch was started while another one was being recorded on this thread.
    #[error("batch recording is not reentrant: a batch is already being recorded on this thread")]
    NestedRecording,

    /// An argument of a recorded call could not be serialized.
    #[error("failed to serialize parameters of call {id} ({method}): {source}")]
    Params {
        /// Id assigned to the call.
        id: CallId,
        /// Remote method name.
        method: String,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The batch exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node did not answer one of the calls.
    #[error("protocol violation: no response for call {id}")]
    MissingResponse {
        /// The unanswered call.
        id: CallId,
    },

    /// The node answered one call more than once.
    #[error("protocol violation: duplicate response for call {id}")]
    DuplicateResponse {
        /// The call answered twice.
        id: CallId,
    },

    /// The node answered a call that was never sent.
    #[error("protocol violation: response for unknown call {}", .id.map_or_else(|| "null".to_string(), |id| id.to_string()))]
    UnexpectedResponse {
        /// The id in the response; `None` for a `null` id.
        id: Option<u64>,
    },
}

impl BatchError {
    /// The phase the session was in when it failed.
    pub fn phase(&self) -> BatchPhase {
        match self {
            Self::Recording { .. } | Self::NestedRecording | Self::Params { .. } => {
                BatchPhase::Recording
            }
            Self::Transport(_) => BatchPhase::Dispatching,
            Self::MissingResponse { .. }
            | Self::DuplicateResponse { .. }
            | Self::UnexpectedResponse { .. } => BatchPhase::Demultiplexing,
        }
    }

    /// Whether the node broke the one-response-per-call contract.
    pub fn is_protocol_violation(&self) -> bool {
        self.phase() == BatchPhase::Demultiplexing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = TransportError::Status {
            status: 401,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "node returned HTTP 401: ");
        assert!(!err.is_timeout());
    }

    #[test]
    fn rpc_error_is_transparent() {
        let err = ClientError::from(CallError {
            id: CallId::new(0),
            code: -8,
            message: "bad".into(),
            data: None,
        });
        assert_eq!(err.to_string(), "rpc call 0 failed with code -8: bad");
    }

    #[test]
    fn phases() {
        assert_eq!(
            BatchError::Recording { message: "x".into() }.phase(),
            BatchPhase::Recording
        );
        assert_eq!(BatchError::NestedRecording.phase(), BatchPhase::Recording);
        assert_eq!(
            BatchError::Transport(TransportError::Malformed { message: "x".into() }).phase(),
            BatchPhase::Dispatching
        );
        assert_eq!(
            BatchError::MissingResponse { id: CallId::new(2) }.phase(),
            BatchPhase::Demultiplexing
        );
        assert!(BatchError::DuplicateResponse { id: CallId::new(1) }.is_protocol_violation());
        assert!(!BatchError::NestedRecording.is_protocol_violation());
    }

    #[test]
    fn unexpected_response_display() {
        assert_eq!(
            BatchError::UnexpectedResponse { id: Some(9) }.to_string(),
            "protocol violation: response for unknown call 9"
        );
        assert_eq!(
            BatchError::UnexpectedResponse { id: None }.to_string(),
            "protocol violation: response for unknown call null"
        );
    }
}
