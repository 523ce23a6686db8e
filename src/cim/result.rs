//! The decoded result of a CIM method invocation.

use crate::cim::{CimMethodParameter, CimMethodParameters};

/// The outcome of one method invocation: the provider's numeric return code and
/// its out-parameters.
///
/// Session implementations build this from whatever their transport hands back.
/// The `ReturnValue` out-parameter of `StdRegProv` methods is decoded into
/// [`CimMethodResult::return_code`] up front so the marshaling layer never has
/// to re-interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct CimMethodResult {
    return_code: u32,
    out_parameters: CimMethodParameters,
}

impl CimMethodResult {
    /// Creates a method result from a return code and out-parameters.
    pub fn new(return_code: u32, out_parameters: CimMethodParameters) -> Self {
        CimMethodResult {
            return_code,
            out_parameters,
        }
    }

    /// The provider's return code; `0` means success.
    pub fn return_code(&self) -> u32 {
        self.return_code
    }

    /// All out-parameters of the invocation.
    pub fn out_parameters(&self) -> &CimMethodParameters {
        &self.out_parameters
    }

    /// Looks up a single out-parameter by name.
    pub fn out_parameter(&self, name: &str) -> Option<&CimMethodParameter> {
        self.out_parameters.get(name)
    }
}
