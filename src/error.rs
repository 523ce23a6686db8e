use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Following the crate's error policy, only programming errors and transport faults surface as
/// [`Error`] values. Registry-level outcomes such as "key not found" or "wrong registry view"
/// are reported through the `return_code` of the response types and never raised here.
///
/// # Error Categories
///
/// ## Lifecycle Errors
/// - [`Error::Closed`] - An operation was invoked on a provider after it was closed
///
/// ## Decode Errors
/// - [`Error::MissingOutParameter`] - A successful method result lacked a mandatory out-parameter
/// - [`Error::UnexpectedValueType`] - An out-parameter carried a value of the wrong CIM type
///
/// ## Transport Errors
/// - [`Error::Session`] - Opaque failure reported by the underlying session implementation
///
/// # Examples
///
/// ```rust
/// use cim_registry::{Error, Result};
///
/// fn report(result: Result<()>) {
///     match result {
///         Ok(()) => println!("ok"),
///         Err(Error::Closed(name)) => eprintln!("use after close: {}", name),
///         Err(Error::Session(message)) => eprintln!("transport failure: {}", message),
///         Err(e) => eprintln!("other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was invoked after the object had been closed.
    ///
    /// Carries the type name of the closed object so callers can tell which
    /// facade rejected the call. Closing is idempotent; only operations that
    /// would reach the remote provider fail this way.
    #[error("Cannot use '{0}' after it has been closed")]
    Closed(&'static str),

    /// A method result with a success return code was missing a mandatory out-parameter.
    ///
    /// The `StdRegProv` methods have a fixed out-parameter shape. A success
    /// result without the expected out-parameter indicates a broken session
    /// implementation or remote provider, not a registry-level failure.
    #[error("Method result is missing the '{0}' out-parameter")]
    MissingOutParameter(&'static str),

    /// An out-parameter carried a value of an unexpected CIM type.
    ///
    /// Raised only for success return codes; on failure codes partial or
    /// oddly typed out-parameters are treated as absent instead.
    #[error("Out-parameter '{name}' holds a {actual} value, expected {expected}")]
    UnexpectedValueType {
        /// The name of the offending out-parameter
        name: &'static str,
        /// The CIM type the operation expected to decode
        expected: &'static str,
        /// The CIM type that was actually present
        actual: &'static str,
    },

    /// Opaque failure from the underlying session transport.
    ///
    /// Session implementations wrap connection, dispatch and protocol errors
    /// into this variant. The crate performs no retry or recovery; the
    /// message passes through unchanged.
    #[error("{0}")]
    Session(String),
}
