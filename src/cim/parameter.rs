//! Named, typed, flagged method parameters and the ordered collection holding them.

use crate::cim::{CimFlags, CimValue};

/// A single named CIM method parameter.
///
/// Parameters are matched by name on the remote side. Input parameters are
/// created with [`CimMethodParameter::input`]; out-parameters are produced by
/// session implementations when decoding a method result.
///
/// # Examples
///
/// ```rust
/// use cim_registry::cim::{CimMethodParameter, CimValue};
///
/// let parameter = CimMethodParameter::input("sSubKeyName", CimValue::from("subkey"));
/// assert_eq!(parameter.name(), "sSubKeyName");
/// assert_eq!(parameter.value().as_str(), Some("subkey"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CimMethodParameter {
    name: String,
    value: CimValue,
    flags: CimFlags,
}

impl CimMethodParameter {
    /// Creates a parameter with explicit flags.
    pub fn new(name: impl Into<String>, value: CimValue, flags: CimFlags) -> Self {
        CimMethodParameter {
            name: name.into(),
            value,
            flags,
        }
    }

    /// Creates an input parameter, flagged [`CimFlags::IN`].
    pub fn input(name: impl Into<String>, value: CimValue) -> Self {
        CimMethodParameter::new(name, value, CimFlags::IN)
    }

    /// The parameter name as the remote provider expects it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter value.
    pub fn value(&self) -> &CimValue {
        &self.value
    }

    /// The qualifier flags attached to this parameter.
    pub fn flags(&self) -> CimFlags {
        self.flags
    }

    /// Whether the parameter carries no value.
    ///
    /// True when the value is [`CimValue::Null`] or the provider flagged the
    /// parameter with [`CimFlags::NULL_VALUE`]; failed invocations commonly
    /// return out-parameters flagged null while still typed.
    pub fn is_null(&self) -> bool {
        self.flags.contains(CimFlags::NULL_VALUE) || self.value.is_null()
    }
}

/// An order-preserving, name-addressable collection of method parameters.
///
/// Order matters: the builder emits parameters in the exact order the
/// `StdRegProv` methods declare them, and this collection never reorders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CimMethodParameters {
    items: Vec<CimMethodParameter>,
}

impl CimMethodParameters {
    /// Creates an empty collection.
    pub fn new() -> Self {
        CimMethodParameters::default()
    }

    /// Appends a parameter, preserving insertion order.
    pub fn push(&mut self, parameter: CimMethodParameter) {
        self.items.push(parameter);
    }

    /// Looks up a parameter by name. The first match wins.
    pub fn get(&self, name: &str) -> Option<&CimMethodParameter> {
        self.items.iter().find(|parameter| parameter.name() == name)
    }

    /// The number of parameters in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CimMethodParameter> {
        self.items.iter()
    }
}

impl FromIterator<CimMethodParameter> for CimMethodParameters {
    fn from_iter<I: IntoIterator<Item = CimMethodParameter>>(iter: I) -> Self {
        CimMethodParameters {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let parameters: CimMethodParameters = [
            CimMethodParameter::input("hDefKey", CimValue::UInt32(0x8000_0001)),
            CimMethodParameter::input("sSubKeyName", CimValue::from("subkey")),
        ]
        .into_iter()
        .collect();

        assert_eq!(parameters.len(), 2);
        assert_eq!(
            parameters.get("hDefKey").unwrap().value().as_u32(),
            Some(0x8000_0001)
        );
        assert!(parameters.get("sValueName").is_none());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut parameters = CimMethodParameters::new();
        parameters.push(CimMethodParameter::input("b", CimValue::UInt32(2)));
        parameters.push(CimMethodParameter::input("a", CimValue::UInt32(1)));

        let names: Vec<&str> = parameters.iter().map(CimMethodParameter::name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn null_flag_outweighs_payload() {
        let flagged = CimMethodParameter::new(
            "uValue",
            CimValue::UInt32(0),
            CimFlags::OUT | CimFlags::NULL_VALUE,
        );
        assert!(flagged.is_null());

        let plain_null = CimMethodParameter::new("uValue", CimValue::Null, CimFlags::OUT);
        assert!(plain_null.is_null());

        let present = CimMethodParameter::new("uValue", CimValue::UInt32(0), CimFlags::OUT);
        assert!(!present.is_null());
    }
}
