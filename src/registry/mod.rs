//! Typed registry operations over the CIM session abstraction.
//!
//! The registry module owns the request/response marshaling for the `StdRegProv`
//! method surface: requests ([`RegistryOperationRequest`], [`RegistryGetValueRequest`])
//! describe what to read, the parameter builder shapes them into the exact parameter
//! lists the remote methods declare, and [`CimRegistryProvider`] invokes the methods
//! and decodes return codes and out-parameters into the response types.
//!
//! # Reference
//! - [StdRegProv methods](https://learn.microsoft.com/en-us/previous-versions/windows/desktop/regprov/stdregprov)

pub mod codes;
pub mod hive;
pub(crate) mod params;
pub mod provider;
pub mod request;
pub mod response;

pub use hive::{RegistryHive, RegistryValueKind, RegistryView};
pub use provider::CimRegistryProvider;
pub use request::{RegistryGetValueRequest, RegistryOperationRequest};
pub use response::{
    GetValueResponse, KeyEnumerationResponse, RegistryValueInfo, ValueEnumerationResponse,
};
