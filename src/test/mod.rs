//! Shared functionality which is used in unit-tests.
//!
//! [`MockSession`] is a scripted [`CimSession`]: tests register one method result per
//! method name, and every invocation is captured so marshaling can be asserted on
//! (namespace, class, parameter order, options). Unscripted methods report a
//! transport fault, which doubles as the transport-failure fixture.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use crate::cim::{
    CimFlags, CimMethodParameter, CimMethodParameters, CimMethodResult, CimOperationOptions,
    CimSession, CimValue,
};
use crate::registry::codes::ERROR_SUCCESS;
use crate::{Error, Result};

/// One captured `invoke_method` call.
#[derive(Debug, Clone)]
pub(crate) struct Invocation {
    pub(crate) namespace: String,
    pub(crate) class_name: String,
    pub(crate) method_name: String,
    pub(crate) parameters: CimMethodParameters,
    pub(crate) options: CimOperationOptions,
}

/// A scripted session for provider tests.
pub(crate) struct MockSession {
    computer_name: String,
    results: RefCell<HashMap<String, CimMethodResult>>,
    invocations: RefCell<Vec<Invocation>>,
    close_count: Cell<usize>,
}

impl MockSession {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(MockSession {
            computer_name: "localhost".to_owned(),
            results: RefCell::new(HashMap::new()),
            invocations: RefCell::new(Vec::new()),
            close_count: Cell::new(0),
        })
    }

    /// Scripts the result returned for `method_name`.
    pub(crate) fn expect(&self, method_name: &str, result: CimMethodResult) {
        self.results.borrow_mut().insert(method_name.to_owned(), result);
    }

    /// All invocations captured so far, oldest first.
    pub(crate) fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// How many times `close` has been called.
    pub(crate) fn close_count(&self) -> usize {
        self.close_count.get()
    }
}

impl CimSession for MockSession {
    fn computer_name(&self) -> &str {
        &self.computer_name
    }

    fn invoke_method(
        &self,
        namespace: &str,
        class_name: &str,
        method_name: &str,
        parameters: &CimMethodParameters,
        options: &CimOperationOptions,
    ) -> Result<CimMethodResult> {
        self.invocations.borrow_mut().push(Invocation {
            namespace: namespace.to_owned(),
            class_name: class_name.to_owned(),
            method_name: method_name.to_owned(),
            parameters: parameters.clone(),
            options: options.clone(),
        });

        self.results
            .borrow()
            .get(method_name)
            .cloned()
            .ok_or_else(|| Error::Session(format!("no result scripted for '{method_name}'")))
    }

    fn close(&self) {
        self.close_count.set(self.close_count.get() + 1);
    }
}

/// Builds a method result the way the remote provider shapes one: each
/// out-parameter is flagged `OUT`, null values additionally `NULL_VALUE`, and
/// success results `NOT_MODIFIED`.
pub(crate) fn method_result(
    return_code: u32,
    out_parameters: impl IntoIterator<Item = (&'static str, CimValue)>,
) -> CimMethodResult {
    let out: CimMethodParameters = out_parameters
        .into_iter()
        .map(|(name, value)| {
            let mut flags = CimFlags::OUT;
            if value.is_null() {
                flags |= CimFlags::NULL_VALUE;
            }
            if return_code == ERROR_SUCCESS {
                flags |= CimFlags::NOT_MODIFIED;
            }
            CimMethodParameter::new(name, value, flags)
        })
        .collect();

    CimMethodResult::new(return_code, out)
}
