//! Per-invocation operation options.
//!
//! `StdRegProv` selects the WOW64 registry view through two provider-specific custom
//! options (`__ProviderArchitecture`, `__RequiredArchitecture`) attached to the call
//! rather than through method parameters. This module models that option channel.

use crate::cim::CimValue;

/// A provider-specific custom option attached to a method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CimCustomOption {
    name: String,
    value: CimValue,
    must_comply: bool,
}

impl CimCustomOption {
    /// The option name, e.g. `__ProviderArchitecture`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option value.
    pub fn value(&self) -> &CimValue {
        &self.value
    }

    /// Whether the provider must honor the option rather than treat it as a hint.
    pub fn must_comply(&self) -> bool {
        self.must_comply
    }
}

/// Options for a single method invocation.
///
/// Empty for calls against the provider's native registry view; carries the two
/// architecture options when a non-default view is requested.
///
/// # Examples
///
/// ```rust
/// use cim_registry::cim::{CimOperationOptions, CimValue};
///
/// let mut options = CimOperationOptions::new();
/// options.set_custom_option("__ProviderArchitecture", CimValue::SInt32(64), true);
/// assert_eq!(options.custom_options().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CimOperationOptions {
    custom: Vec<CimCustomOption>,
}

impl CimOperationOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        CimOperationOptions::default()
    }

    /// Attaches a custom option, preserving insertion order.
    pub fn set_custom_option(
        &mut self,
        name: impl Into<String>,
        value: CimValue,
        must_comply: bool,
    ) {
        self.custom.push(CimCustomOption {
            name: name.into(),
            value,
            must_comply,
        });
    }

    /// The custom options in insertion order.
    pub fn custom_options(&self) -> &[CimCustomOption] {
        &self.custom
    }

    /// Looks up a custom option by name.
    pub fn custom_option(&self, name: &str) -> Option<&CimCustomOption> {
        self.custom.iter().find(|option| option.name == name)
    }
}
