//! Request types describing a single registry operation.
//!
//! Requests are immutable once built and are consumed per call. They carry the
//! root key, the subkey path, the WOW64 view, and - for get-value operations -
//! the value name to read.

use crate::cim::{CimOperationOptions, CimValue};
use crate::registry::params::options;
use crate::registry::{RegistryHive, RegistryView};

/// A request targeting a registry key: enumeration of its subkeys or values.
///
/// The subkey name defaults to the empty string (the hive root) and the view
/// defaults to the provider's native one.
///
/// # Examples
///
/// ```rust
/// use cim_registry::registry::{RegistryHive, RegistryOperationRequest, RegistryView};
///
/// let request = RegistryOperationRequest::new(RegistryHive::LocalMachine)
///     .with_sub_key_name(r"Software\Microsoft\.NETFramework")
///     .with_view(RegistryView::Registry64);
///
/// assert_eq!(request.hive(), RegistryHive::LocalMachine);
/// assert_eq!(request.view(), RegistryView::Registry64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOperationRequest {
    hive: RegistryHive,
    sub_key_name: String,
    view: RegistryView,
}

impl RegistryOperationRequest {
    /// Creates a request against the root of `hive` using the default view.
    pub fn new(hive: RegistryHive) -> Self {
        RegistryOperationRequest {
            hive,
            sub_key_name: String::new(),
            view: RegistryView::Default,
        }
    }

    /// Sets the subkey path, relative to the hive root.
    #[must_use]
    pub fn with_sub_key_name(mut self, sub_key_name: impl Into<String>) -> Self {
        self.sub_key_name = sub_key_name.into();
        self
    }

    /// Sets the WOW64 view the operation targets.
    #[must_use]
    pub fn with_view(mut self, view: RegistryView) -> Self {
        self.view = view;
        self
    }

    /// The root key of the request.
    pub fn hive(&self) -> RegistryHive {
        self.hive
    }

    /// The subkey path; empty means the hive root.
    pub fn sub_key_name(&self) -> &str {
        &self.sub_key_name
    }

    /// The WOW64 view the operation targets.
    pub fn view(&self) -> RegistryView {
        self.view
    }

    /// Builds the per-call operation options for this request.
    ///
    /// The default view attaches nothing, so the call lands on the provider's
    /// native bitness. A non-default view attaches both architecture options
    /// with `must_comply` set; the provider then fails the call with return
    /// code 1 instead of silently answering from the wrong view.
    pub fn operation_options(&self) -> CimOperationOptions {
        let mut operation_options = CimOperationOptions::new();
        if self.view != RegistryView::Default {
            operation_options.set_custom_option(
                options::PROVIDER_ARCHITECTURE,
                CimValue::SInt32(self.view.provider_architecture()),
                true,
            );
            operation_options.set_custom_option(
                options::REQUIRED_ARCHITECTURE,
                CimValue::Boolean(true),
                true,
            );
        }
        operation_options
    }
}

/// A request to read a single value from a registry key.
///
/// Extends [`RegistryOperationRequest`] with an optional value name. A `None`
/// value name addresses the key's default (unnamed) value, which `StdRegProv`
/// models as a null `sValueName` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryGetValueRequest {
    operation: RegistryOperationRequest,
    value_name: Option<String>,
}

impl RegistryGetValueRequest {
    /// Creates a get-value request against the root of `hive` using the default view.
    pub fn new(hive: RegistryHive) -> Self {
        RegistryGetValueRequest {
            operation: RegistryOperationRequest::new(hive),
            value_name: None,
        }
    }

    /// Sets the subkey path, relative to the hive root.
    #[must_use]
    pub fn with_sub_key_name(mut self, sub_key_name: impl Into<String>) -> Self {
        self.operation = self.operation.with_sub_key_name(sub_key_name);
        self
    }

    /// Sets the WOW64 view the operation targets.
    #[must_use]
    pub fn with_view(mut self, view: RegistryView) -> Self {
        self.operation = self.operation.with_view(view);
        self
    }

    /// Sets the name of the value to read.
    #[must_use]
    pub fn with_value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = Some(value_name.into());
        self
    }

    /// The root key of the request.
    pub fn hive(&self) -> RegistryHive {
        self.operation.hive()
    }

    /// The subkey path; empty means the hive root.
    pub fn sub_key_name(&self) -> &str {
        self.operation.sub_key_name()
    }

    /// The WOW64 view the operation targets.
    pub fn view(&self) -> RegistryView {
        self.operation.view()
    }

    /// The name of the value to read; `None` addresses the key's default value.
    pub fn value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    /// The key-targeting part of this request.
    pub fn operation(&self) -> &RegistryOperationRequest {
        &self.operation
    }
}

impl From<RegistryGetValueRequest> for RegistryOperationRequest {
    fn from(request: RegistryGetValueRequest) -> Self {
        request.operation
    }
}
