//! Variant value type for CIM method parameters.
//!
//! CIM models method arguments and results as typed variants. [`CimValue`] covers the
//! subset of CIM types the `StdRegProv` method surface uses; anything beyond that is
//! out of scope for this crate.

/// A typed CIM value, as carried by method parameters and out-parameters.
///
/// Only the types used by the `StdRegProv` registry methods are represented.
/// Accessors return `None` when the value holds a different type, which lets
/// decoding code treat "wrong type" and "absent" uniformly where the error
/// policy calls for it.
///
/// # Examples
///
/// ```rust
/// use cim_registry::cim::CimValue;
///
/// let value = CimValue::UInt32(42);
/// assert_eq!(value.as_u32(), Some(42));
/// assert_eq!(value.as_str(), None);
/// assert!(!value.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CimValue {
    /// No value. Out-parameters of failed calls typically carry this.
    Null,
    /// A boolean, used by operation options such as `__RequiredArchitecture`.
    Boolean(bool),
    /// A signed 32-bit integer, used by `__ProviderArchitecture` and `Types`.
    SInt32(i32),
    /// An unsigned 32-bit integer, used by `hDefKey`, `uValue` (REG_DWORD) and `ReturnValue`.
    UInt32(u32),
    /// An unsigned 64-bit integer, used by `uValue` for REG_QWORD values.
    UInt64(u64),
    /// A string, used by `sSubKeyName`, `sValueName` and `sValue`.
    String(String),
    /// An array of strings, used by `sNames` and REG_MULTI_SZ `sValue`.
    StringArray(Vec<String>),
    /// An array of bytes, used by `uValue` for REG_BINARY values.
    UInt8Array(Vec<u8>),
    /// An array of signed 32-bit integers, used by the `Types` out-parameter.
    SInt32Array(Vec<i32>),
}

impl CimValue {
    /// Returns `true` if this value is [`CimValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, CimValue::Null)
    }

    /// Returns the contained boolean, or `None` for any other type.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CimValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained signed 32-bit integer, or `None` for any other type.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            CimValue::SInt32(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained unsigned 32-bit integer, or `None` for any other type.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            CimValue::UInt32(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained unsigned 64-bit integer, or `None` for any other type.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CimValue::UInt64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained string slice, or `None` for any other type.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CimValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained string array, or `None` for any other type.
    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            CimValue::StringArray(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained byte array, or `None` for any other type.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CimValue::UInt8Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained signed 32-bit integer array, or `None` for any other type.
    pub fn as_i32_array(&self) -> Option<&[i32]> {
        match self {
            CimValue::SInt32Array(value) => Some(value),
            _ => None,
        }
    }

    /// The CIM type name of this value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            CimValue::Null => "Null",
            CimValue::Boolean(_) => "Boolean",
            CimValue::SInt32(_) => "SInt32",
            CimValue::UInt32(_) => "UInt32",
            CimValue::UInt64(_) => "UInt64",
            CimValue::String(_) => "String",
            CimValue::StringArray(_) => "StringArray",
            CimValue::UInt8Array(_) => "UInt8Array",
            CimValue::SInt32Array(_) => "SInt32Array",
        }
    }
}

impl From<&str> for CimValue {
    fn from(value: &str) -> Self {
        CimValue::String(value.to_owned())
    }
}

impl From<String> for CimValue {
    fn from(value: String) -> Self {
        CimValue::String(value)
    }
}

impl From<u32> for CimValue {
    fn from(value: u32) -> Self {
        CimValue::UInt32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(CimValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(CimValue::SInt32(-64).as_i32(), Some(-64));
        assert_eq!(CimValue::UInt32(7).as_u32(), Some(7));
        assert_eq!(CimValue::UInt64(1 << 40).as_u64(), Some(1 << 40));
        assert_eq!(CimValue::from("abcd").as_str(), Some("abcd"));
        assert_eq!(
            CimValue::StringArray(vec!["a".into(), "b".into()]).as_string_array(),
            Some(["a".to_owned(), "b".to_owned()].as_slice())
        );
        assert_eq!(
            CimValue::UInt8Array(vec![1, 2, 3]).as_bytes(),
            Some([1u8, 2, 3].as_slice())
        );
        assert_eq!(
            CimValue::SInt32Array(vec![1, 4]).as_i32_array(),
            Some([1, 4].as_slice())
        );
    }

    #[test]
    fn accessors_reject_other_variants() {
        let value = CimValue::UInt32(1);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_i32(), None);
        assert_eq!(value.as_u64(), None);
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_string_array(), None);
        assert_eq!(value.as_bytes(), None);
        assert_eq!(value.as_i32_array(), None);
    }

    #[test]
    fn null_detection() {
        assert!(CimValue::Null.is_null());
        assert!(!CimValue::UInt32(0).is_null());
        assert_eq!(CimValue::Null.type_name(), "Null");
    }
}
