//! Call recorder behind the recording views.

use std::cell::RefCell;

use btcrpc_core::{CallId, Param, RpcRequest};
use tracing::trace;

use super::builder::RequestBuilder;
use crate::errors::BatchError;

/// Captures calls made through a [`BatchView`](super::BatchView).
///
/// Recording is synchronous and single-threaded, so interior mutability
/// through `RefCell` is enough. The first argument that fails to serialize
/// is kept and fails the session when recording ends.
#[derive(Debug)]
pub(crate) struct Recorder {
    builder: RefCell<RequestBuilder>,
    failure: RefCell<Option<BatchError>>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self {
            builder: RefCell::new(RequestBuilder::new()),
            failure: RefCell::new(None),
        }
    }

    /// Record one call. A call whose arguments failed to serialize still
    /// takes an id so later ids stay stable.
    pub(crate) fn record(
        &self,
        method: &str,
        params: serde_json::Result<Vec<Param>>,
    ) -> CallId {
        let mut builder = self.builder.borrow_mut();
        match params {
            Ok(params) => {
                let id = builder.push(method, params);
                trace!(%id, method, "call recorded");
                id
            }
            Err(source) => {
                let id = builder.push(method, Vec::new());
                let mut failure = self.failure.borrow_mut();
                if failure.is_none() {
                    *failure = Some(BatchError::Params {
                        id,
                        method: method.to_string(),
                        source,
                    });
                }
                id
            }
        }
    }

    /// Calls recorded so far.
    pub(crate) fn len(&self) -> usize {
        self.builder.borrow().len()
    }

    /// End recording.
    pub(crate) fn finish(self) -> Result<Vec<RpcRequest>, BatchError> {
        if let Some(err) = self.failure.into_inner() {
            return Err(err);
        }
        Ok(self.builder.into_inner().finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::ser::{Serialize, Serializer};

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("nope"))
        }
    }

    fn bad_params() -> serde_json::Result<Vec<Param>> {
        Param::from_serialize(&Unserializable).map(|p| vec![p])
    }

    #[test]
    fn records_in_order() {
        let r = Recorder::new();
        assert_eq!(r.record("a", Ok(vec![])), CallId::new(0));
        assert_eq!(r.record("b", Ok(vec![Param::Unset])), CallId::new(1));
        assert_eq!(r.len(), 2);
        let requests = r.finish().unwrap();
        assert_eq!(requests[1].method, "b");
        assert_eq!(requests[1].params, vec![serde_json::Value::Null]);
    }

    #[test]
    fn first_param_failure_wins() {
        let r = Recorder::new();
        let _ = r.record("a", Ok(vec![]));
        let bad = r.record("b", bad_params());
        let _ = r.record("c", bad_params());
        assert_eq!(bad, CallId::new(1));
        assert_matches!(
            r.finish(),
            Err(BatchError::Params { id, method, .. }) if id == CallId::new(1) && method == "b"
        );
    }
}
