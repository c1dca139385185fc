//! JSON-RPC wire envelopes.
//!
//! Requests always carry the `"2.0"` version marker. Responses are read
//! leniently: Bitcoin Core answers in the 1.0 shape (`result` and `error`
//! both present, one of them `null`), other servers in the 2.0 shape (one of
//! the two absent). Both decode to the same [`RpcResponse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version marker attached to every request envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing request envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version marker, always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Request identifier, echoed back by the server.
    pub id: u64,
    /// Remote method name (e.g. `getblockcount`).
    pub method: String,
    /// Positional parameters. Unset slots are explicit `null`s.
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Build a request envelope, normalizing the parameter list.
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            method: method.into(),
            params: normalize_params(params),
        }
    }
}

/// Incoming response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Echoed request id. `None` when the server could not read the request.
    #[serde(default)]
    pub id: Option<u64>,
    /// Result payload. `None` for both an absent and a `null` result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload, present when the call failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorPayload>,
}

/// Structured error inside an [`RpcResponse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorPayload {
    /// Numeric error code (see [`crate::RpcErrorKind`]).
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    /// Optional structured detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Build a success response.
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    pub fn error(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            result: None,
            error: Some(RpcErrorPayload {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Whether this response carries an error payload.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Split into the call's outcome.
    ///
    /// The error wins when present. A success with no result is `null`
    /// (methods like `stop` or `ping` return nothing).
    pub fn into_outcome(self) -> Result<Value, RpcErrorPayload> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// One positional parameter before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// The caller left this slot empty.
    Unset,
    /// A concrete value.
    Value(Value),
}

impl Param {
    /// Serialize a typed argument. A `null` result (e.g. `Option::None`)
    /// marks the slot as unset.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(match serde_json::to_value(value)? {
            Value::Null => Self::Unset,
            v => Self::Value(v),
        })
    }

    /// Whether the slot is unset.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The wire value; unset becomes an explicit `null`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Unset => Value::Null,
            Self::Value(v) => v,
        }
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        if value.is_null() { Self::Unset } else { Self::Value(value) }
    }
}

impl<T: Into<Value>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, |v| Self::from(v.into()))
    }
}

/// Rewrite every unset slot to `null`, position by position.
///
/// The wire format has no way to omit an element in the middle of an
/// array, so a hole must become `null` rather than shift later arguments.
pub fn normalize_params(params: Vec<Param>) -> Vec<Value> {
    params.into_iter().map(Param::into_value).collect()
}
