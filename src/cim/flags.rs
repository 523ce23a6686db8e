//! Flags attached to CIM method parameters.

use bitflags::bitflags;

bitflags! {
    /// Qualifier flags carried by a [`CimMethodParameter`](crate::cim::CimMethodParameter).
    ///
    /// The remote provider marks out-parameters of failed calls with
    /// [`CimFlags::NULL_VALUE`] rather than omitting them, so decoding must
    /// honor the flag in addition to the value itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CimFlags: u32 {
        /// The parameter is an input to the method.
        const IN = 1 << 0;
        /// The parameter is an output of the method.
        const OUT = 1 << 1;
        /// The parameter was not modified by the invocation.
        const NOT_MODIFIED = 1 << 2;
        /// The parameter carries no value, regardless of its payload.
        const NULL_VALUE = 1 << 3;
    }
}

impl Default for CimFlags {
    fn default() -> Self {
        CimFlags::empty()
    }
}
