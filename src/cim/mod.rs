//! CIM session abstraction and method-invocation data model.
//!
//! This module defines the small slice of the Common Information Model that registry
//! marshaling needs: a variant value type ([`CimValue`]), named and flagged method
//! parameters ([`CimMethodParameter`], [`CimMethodParameters`]), per-call operation
//! options ([`CimOperationOptions`]), the decoded result of a method invocation
//! ([`CimMethodResult`]), and the [`CimSession`] trait behind which the actual
//! DCOM/WinRM transport lives.
//!
//! The crate never implements the CIM protocol itself. Production code supplies a
//! [`CimSession`] backed by a real transport; tests supply scripted fakes.
//!
//! # Reference
//! - [WMI StdRegProv class](https://learn.microsoft.com/en-us/previous-versions/windows/desktop/regprov/stdregprov)

mod flags;
mod options;
mod parameter;
mod result;
mod session;
mod value;

pub use flags::CimFlags;
pub use options::{CimCustomOption, CimOperationOptions};
pub use parameter::{CimMethodParameter, CimMethodParameters};
pub use result::CimMethodResult;
pub use session::CimSession;
pub use value::CimValue;
