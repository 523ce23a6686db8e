//! Fixed method surface of `StdRegProv` and the parameter builder.
//!
//! The remote provider matches parameters by NAME, in the order the methods declare
//! them. Omitting or renaming a parameter does not fail locally; it fails on the
//! remote side. Everything name-shaped is therefore pinned down here in one place.

use crate::cim::{CimMethodParameter, CimMethodParameters, CimValue};
use crate::registry::{RegistryGetValueRequest, RegistryOperationRequest};

/// The namespace hosting the registry provider class.
pub(crate) const NAMESPACE: &str = r"root\default";

/// The WMI class exposing registry operations.
pub(crate) const CLASS_NAME: &str = "StdRegProv";

/// Method names of the `StdRegProv` class. Casing is the provider's, not ours.
pub(crate) mod methods {
    pub(crate) const ENUM_KEY: &str = "EnumKey";
    pub(crate) const ENUM_VALUES: &str = "EnumValues";
    pub(crate) const GET_BINARY_VALUE: &str = "GetBinaryValue";
    pub(crate) const GET_DWORD_VALUE: &str = "GetDWORDValue";
    pub(crate) const GET_EXPANDED_STRING_VALUE: &str = "GetExpandedStringValue";
    pub(crate) const GET_MULTI_STRING_VALUE: &str = "GetMultiStringValue";
    pub(crate) const GET_QWORD_VALUE: &str = "GetQWORDValue";
    pub(crate) const GET_STRING_VALUE: &str = "GetStringValue";
}

/// Parameter names shared by the `StdRegProv` methods.
pub(crate) mod parameters {
    pub(crate) const H_DEF_KEY: &str = "hDefKey";
    pub(crate) const S_SUB_KEY_NAME: &str = "sSubKeyName";
    pub(crate) const S_VALUE_NAME: &str = "sValueName";
    pub(crate) const S_NAMES: &str = "sNames";
    pub(crate) const S_VALUE: &str = "sValue";
    pub(crate) const U_VALUE: &str = "uValue";
    pub(crate) const TYPES: &str = "Types";
}

/// Names of the provider-architecture custom options selecting the WOW64 view.
pub(crate) mod options {
    pub(crate) const PROVIDER_ARCHITECTURE: &str = "__ProviderArchitecture";
    pub(crate) const REQUIRED_ARCHITECTURE: &str = "__RequiredArchitecture";
}

/// Builds the parameter list for key-targeting methods (`EnumKey`, `EnumValues`).
pub(crate) fn operation_parameters(request: &RegistryOperationRequest) -> CimMethodParameters {
    [
        CimMethodParameter::input(parameters::H_DEF_KEY, CimValue::UInt32(request.hive().value())),
        CimMethodParameter::input(parameters::S_SUB_KEY_NAME, CimValue::from(request.sub_key_name())),
    ]
    .into_iter()
    .collect()
}

/// Builds the parameter list for the `Get*Value` methods.
///
/// An absent value name is sent as a null `sValueName`, which `StdRegProv`
/// resolves to the key's default value.
pub(crate) fn get_value_parameters(request: &RegistryGetValueRequest) -> CimMethodParameters {
    let value_name = match request.value_name() {
        Some(name) => CimValue::from(name),
        None => CimValue::Null,
    };

    [
        CimMethodParameter::input(parameters::H_DEF_KEY, CimValue::UInt32(request.hive().value())),
        CimMethodParameter::input(parameters::S_SUB_KEY_NAME, CimValue::from(request.sub_key_name())),
        CimMethodParameter::input(parameters::S_VALUE_NAME, value_name),
    ]
    .into_iter()
    .collect()
}
