#![doc(html_no_source)]
#![deny(missing_docs)]

//! # cim-registry
//!
//! A typed, transport-agnostic client for the Windows registry over WMI/CIM.
//!
//! `cim-registry` exposes the read and enumerate operations of the `StdRegProv`
//! WMI class through a single facade, [`CimRegistryProvider`]. The crate owns the
//! request/response marshaling: it shapes each registry operation into the exact
//! named, typed, ordered parameter list the remote method declares, attaches the
//! WOW64 view-selection options where requested, invokes the method through a
//! session abstraction, and decodes the return code and out-parameters into
//! strongly typed responses.
//!
//! ## Features
//!
//! - **Typed operations** - subkey and value enumeration plus getters for binary,
//!   DWORD, QWORD, string, expanded-string and multi-string values
//! - **Return codes as data** - registry-level outcomes (not found, wrong view,
//!   access denied) are reported in the response, never raised as errors
//! - **WOW64 view selection** - target the 32-bit or 64-bit registry view through
//!   provider-architecture options
//! - **Transport-agnostic** - the CIM transport lives behind the
//!   [`cim::CimSession`] trait; production code plugs in a real session, tests
//!   plug in fakes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_registry::prelude::*;
//!
//! fn enumerate(session: Arc<dyn CimSession>) -> cim_registry::Result<()> {
//!     let provider = CimRegistryProvider::new(session);
//!
//!     let request = RegistryOperationRequest::new(RegistryHive::CurrentUser)
//!         .with_sub_key_name(r"Software\Microsoft");
//!     let response = provider.enumerate_keys(&request)?;
//!
//!     if response.is_success() {
//!         for key in response.keys() {
//!             println!("{key}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate composes linearly: caller → [`CimRegistryProvider`] → parameter
//! builder → [`cim::CimSession`] → (external CIM provider) → response decoding.
//! There is no concurrency, caching or retry at this layer; each operation is one
//! blocking invocation, and any timeout or retry policy belongs to the session
//! implementation.
//!
//! - [`registry`] - requests, responses, enumerations and the provider facade
//! - [`cim`] - the session trait and the CIM value/parameter data model
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Error Handling
//!
//! Errors are reserved for programming mistakes (use after close, malformed
//! success results) and transport faults. Everything the registry itself has to
//! say arrives as a return code on the response:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_registry::prelude::*;
//! use cim_registry::registry::codes;
//!
//! fn read(session: Arc<dyn CimSession>) -> cim_registry::Result<()> {
//!     let provider = CimRegistryProvider::new(session);
//!     let request = RegistryGetValueRequest::new(RegistryHive::LocalMachine)
//!         .with_sub_key_name(r"Software\Microsoft\.NETFramework")
//!         .with_value_name("InstallRoot");
//!
//!     let response = provider.get_string_value(&request)?;
//!     match response.return_code() {
//!         codes::ERROR_SUCCESS => println!("{:?}", response.value()),
//!         codes::ERROR_FILE_NOT_FOUND => println!("no such key or value"),
//!         code => println!("provider returned code {code}"),
//!     }
//!     Ok(())
//! }
//! ```

mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
pub mod prelude;

/// CIM session abstraction and method-invocation data model.
///
/// Everything needed to talk to a CIM server about method invocations: the
/// [`cim::CimValue`] variant type, named parameters and their ordered
/// collection, per-call options, decoded results, and the [`cim::CimSession`]
/// trait behind which the actual transport lives.
pub mod cim;

/// Typed registry operations over the CIM session abstraction.
///
/// Requests, responses, the hive/view/kind enumerations and the
/// [`CimRegistryProvider`] facade itself.
pub mod registry;

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
pub use registry::CimRegistryProvider;
