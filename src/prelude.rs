//! # cim-registry Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! traits from the cim-registry library. Import this module to get quick access to
//! everything a typical caller needs.

/// The main error type for all cim-registry operations
pub use crate::Error;

/// The result type used throughout cim-registry
pub use crate::Result;

/// Main entry point for registry access
pub use crate::registry::CimRegistryProvider;

/// Request types describing registry operations
pub use crate::registry::{RegistryGetValueRequest, RegistryOperationRequest};

/// Response types carrying return codes and decoded data
pub use crate::registry::{
    GetValueResponse, KeyEnumerationResponse, RegistryValueInfo, ValueEnumerationResponse,
};

/// Root key, view and value kind enumerations
pub use crate::registry::{RegistryHive, RegistryValueKind, RegistryView};

/// The session trait behind which the CIM transport lives
pub use crate::cim::CimSession;

/// The CIM method-invocation data model
pub use crate::cim::{
    CimFlags, CimMethodParameter, CimMethodParameters, CimMethodResult, CimOperationOptions,
    CimValue,
};
