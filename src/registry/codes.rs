//! Win32 return codes surfaced by the `StdRegProv` methods.
//!
//! The provider reports registry-level outcomes through these numeric codes.
//! Only the handful of codes callers routinely branch on are named here; all
//! other codes pass through uninterpreted.

/// The operation completed successfully.
pub const ERROR_SUCCESS: u32 = 0;

/// Incorrect function. Returned when the requested registry view does not
/// exist on the target, e.g. asking a 32-bit-only value path for its 64-bit view.
pub const ERROR_INVALID_FUNCTION: u32 = 1;

/// The system cannot find the key or value specified.
pub const ERROR_FILE_NOT_FOUND: u32 = 2;

/// Access to the key was denied.
pub const ERROR_ACCESS_DENIED: u32 = 5;
