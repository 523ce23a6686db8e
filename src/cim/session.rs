//! The session seam between registry marshaling and the CIM transport.

use crate::cim::{CimMethodParameters, CimMethodResult, CimOperationOptions};
use crate::Result;

/// A connection to a local or remote CIM server, capable of invoking class methods.
///
/// This is the crate's only boundary to the outside world. Everything behind it
/// (DCOM or WinRM negotiation, dispatch, timeouts, retries) is the transport's
/// business; this crate only shapes requests and decodes results.
///
/// # Contract
///
/// - [`invoke_method`](CimSession::invoke_method) blocks until the invocation
///   completes and returns the provider's return code and out-parameters, or an
///   [`Error::Session`](crate::Error::Session) for transport-level failures.
///   Registry-level failures (key not found, wrong view) are NOT transport
///   failures; they arrive as non-zero return codes in the result.
/// - [`close`](CimSession::close) must be idempotent. Implementations own
///   whatever interior state release requires; callers may close through a
///   shared reference.
///
/// Implementations are free to be `!Send`; the crate imposes no threading model
/// beyond what the caller arranges.
pub trait CimSession {
    /// The name of the computer this session is connected to.
    fn computer_name(&self) -> &str;

    /// Invokes `method_name` on `class_name` within `namespace`, blocking until done.
    fn invoke_method(
        &self,
        namespace: &str,
        class_name: &str,
        method_name: &str,
        parameters: &CimMethodParameters,
        options: &CimOperationOptions,
    ) -> Result<CimMethodResult>;

    /// Releases the connection. Safe to call more than once.
    fn close(&self);
}
