//! Typed responses carrying the provider's return code alongside decoded data.
//!
//! Registry-level outcomes are data, not errors: every response exposes the raw
//! `return_code` and an `is_success` derived solely from it. Value presence is
//! tracked separately, because a success code with no data (empty key, default
//! value unset) is a legitimate outcome.

use crate::registry::codes::ERROR_SUCCESS;
use crate::registry::RegistryValueKind;

/// Response of a `Get*Value` operation.
///
/// `value` is `None` both when the remote value is absent and when the call
/// failed; `return_code` tells the two apart.
///
/// # Examples
///
/// ```rust
/// use cim_registry::registry::GetValueResponse;
///
/// let response = GetValueResponse::new(0, Some(42u32));
/// assert!(response.is_success());
/// assert!(response.has_value());
/// assert_eq!(response.value(), Some(&42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetValueResponse<T> {
    return_code: u32,
    value: Option<T>,
}

impl<T> GetValueResponse<T> {
    /// Creates a response from a return code and an optional decoded value.
    pub fn new(return_code: u32, value: Option<T>) -> Self {
        GetValueResponse { return_code, value }
    }

    /// The provider's return code.
    pub fn return_code(&self) -> u32 {
        self.return_code
    }

    /// Whether the return code signals success. Independent of value presence.
    pub fn is_success(&self) -> bool {
        self.return_code == ERROR_SUCCESS
    }

    /// The decoded value, if the provider returned one.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Consumes the response, yielding the decoded value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Response of an `EnumKey` operation: the names of a key's direct subkeys.
///
/// `keys` is empty - never null - when the key has no subkeys or the call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEnumerationResponse {
    return_code: u32,
    keys: Vec<String>,
}

impl KeyEnumerationResponse {
    /// Creates a response from a return code and the enumerated key names.
    pub fn new(return_code: u32, keys: Vec<String>) -> Self {
        KeyEnumerationResponse { return_code, keys }
    }

    /// The provider's return code.
    pub fn return_code(&self) -> u32 {
        self.return_code
    }

    /// Whether the return code signals success.
    pub fn is_success(&self) -> bool {
        self.return_code == ERROR_SUCCESS
    }

    /// The subkey names, in provider order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Consumes the response, yielding the subkey names.
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }
}

/// A value name paired with the kind of data it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryValueInfo {
    name: String,
    value_kind: RegistryValueKind,
}

impl RegistryValueInfo {
    /// Creates a name/kind pair.
    pub fn new(name: impl Into<String>, value_kind: RegistryValueKind) -> Self {
        RegistryValueInfo {
            name: name.into(),
            value_kind,
        }
    }

    /// The value name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of data the value holds.
    pub fn value_kind(&self) -> RegistryValueKind {
        self.value_kind
    }
}

/// Response of an `EnumValues` operation: the key's value names with their kinds.
///
/// `values` preserves the provider's order and is empty - never null - when the
/// key has no values or the call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEnumerationResponse {
    return_code: u32,
    values: Vec<RegistryValueInfo>,
}

impl ValueEnumerationResponse {
    /// Creates a response from a return code and the enumerated value entries.
    pub fn new(return_code: u32, values: Vec<RegistryValueInfo>) -> Self {
        ValueEnumerationResponse { return_code, values }
    }

    /// The provider's return code.
    pub fn return_code(&self) -> u32 {
        self.return_code
    }

    /// Whether the return code signals success.
    pub fn is_success(&self) -> bool {
        self.return_code == ERROR_SUCCESS
    }

    /// The name/kind pairs, in provider order.
    pub fn values(&self) -> &[RegistryValueInfo] {
        &self.values
    }

    /// Consumes the response, yielding the name/kind pairs.
    pub fn into_values(self) -> Vec<RegistryValueInfo> {
        self.values
    }
}
