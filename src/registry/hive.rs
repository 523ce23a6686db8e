//! Root key, view and value kind enumerations.
//!
//! These are closed sets with fixed numeric identities defined by the Win32 registry
//! API. The enums carry their wire values as discriminants so conversion from raw
//! constants is validated rather than assumed.

use strum::{Display, FromRepr};

/// The predefined root keys of the Windows registry.
///
/// Discriminants are the HKEY constants `StdRegProv` expects in `hDefKey`.
/// Conversion from a raw constant goes through [`RegistryHive::from_repr`],
/// which rejects anything outside the set.
///
/// # Examples
///
/// ```rust
/// use cim_registry::registry::RegistryHive;
///
/// assert_eq!(RegistryHive::from_repr(0x8000_0001), Some(RegistryHive::CurrentUser));
/// assert_eq!(RegistryHive::from_repr(0xdead_beef), None);
/// assert_eq!(RegistryHive::CurrentUser.value(), 0x8000_0001);
/// ```
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr)]
pub enum RegistryHive {
    /// `HKEY_CLASSES_ROOT`
    ClassesRoot = 0x8000_0000,
    /// `HKEY_CURRENT_USER`
    CurrentUser = 0x8000_0001,
    /// `HKEY_LOCAL_MACHINE`
    LocalMachine = 0x8000_0002,
    /// `HKEY_USERS`
    Users = 0x8000_0003,
    /// `HKEY_CURRENT_CONFIG`
    CurrentConfig = 0x8000_0005,
}

impl RegistryHive {
    /// The HKEY constant for this hive, as sent in the `hDefKey` parameter.
    pub fn value(self) -> u32 {
        self as u32
    }
}

/// Which WOW64 view of the registry an operation targets.
///
/// The default view is whatever the provider's native bitness resolves to.
/// Non-default views are requested through custom operation options rather
/// than method parameters; see
/// [`RegistryOperationRequest::operation_options`](crate::registry::RegistryOperationRequest).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegistryView {
    /// The provider's native view.
    #[default]
    Default,
    /// The 32-bit view (`KEY_WOW64_32KEY` equivalent).
    Registry32,
    /// The 64-bit view (`KEY_WOW64_64KEY` equivalent).
    Registry64,
}

impl RegistryView {
    /// The `__ProviderArchitecture` option value for this view.
    ///
    /// `0` is never sent; the default view attaches no architecture options at all.
    pub fn provider_architecture(self) -> i32 {
        match self {
            RegistryView::Default => 0,
            RegistryView::Registry32 => 32,
            RegistryView::Registry64 => 64,
        }
    }
}

/// The kind of data a registry value holds, as reported by the `Types`
/// out-parameter of `EnumValues`.
///
/// Discriminants are the REG_* type codes. Codes outside the set decode to
/// [`RegistryValueKind::Unknown`] instead of failing, since enumeration must
/// not break on provider-defined extensions.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr)]
pub enum RegistryValueKind {
    /// A type code this crate does not model.
    Unknown = 0,
    /// `REG_SZ` - a string.
    String = 1,
    /// `REG_EXPAND_SZ` - a string with unexpanded environment variable references.
    ExpandString = 2,
    /// `REG_BINARY` - arbitrary bytes.
    Binary = 3,
    /// `REG_DWORD` - a 32-bit unsigned integer.
    DWord = 4,
    /// `REG_MULTI_SZ` - an array of strings.
    MultiString = 7,
    /// `REG_QWORD` - a 64-bit unsigned integer.
    QWord = 11,
}

impl RegistryValueKind {
    /// Decodes a raw type code, mapping anything unrecognized to [`RegistryValueKind::Unknown`].
    pub fn from_code(code: i32) -> Self {
        u32::try_from(code)
            .ok()
            .and_then(RegistryValueKind::from_repr)
            .unwrap_or(RegistryValueKind::Unknown)
    }
}
