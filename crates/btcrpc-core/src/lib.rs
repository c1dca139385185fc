//! # btcrpc-core
//!
//! Foundation types shared by every btcrpc crate.
//!
//! - **Envelopes**: [`RpcRequest`], [`RpcResponse`], [`RpcErrorPayload`] matching
//!   the JSON-RPC wire format Bitcoin Core speaks
//! - **Parameters**: [`Param`] and [`normalize_params`] for positional argument lists
//!   where an unset slot must still occupy its position
//! - **Call identifiers**: [`CallId`]
//! - **Errors**: [`CallError`] (one failed call inside a batch or a single call)
//!   and the [`RpcErrorKind`] taxonomy of node error codes
//! - **Logging**: [`logging::init_subscriber`]

#![deny(unsafe_code)]

pub mod envelope;
pub mod errors;
pub mod ids;
pub mod logging;

pub use envelope::{JSONRPC_VERSION, Param, RpcErrorPayload, RpcRequest, RpcResponse, normalize_params};
pub use errors::{CallError, RpcErrorKind};
pub use ids::CallId;
