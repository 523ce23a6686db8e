//! The registry provider facade.
//!
//! [`CimRegistryProvider`] is the single entry point for registry reads: one method per
//! `StdRegProv` primitive, each building the fixed parameter shape, invoking the method
//! through the session, and decoding the return code and out-parameters into a typed
//! response. Registry-level failures are reported in the response; only programming
//! errors and transport faults surface as [`Error`] values.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::cim::{CimMethodParameters, CimMethodResult, CimOperationOptions, CimSession, CimValue};
use crate::registry::codes::ERROR_SUCCESS;
use crate::registry::params::{self, methods, parameters, CLASS_NAME, NAMESPACE};
use crate::registry::{
    GetValueResponse, KeyEnumerationResponse, RegistryGetValueRequest, RegistryOperationRequest,
    RegistryValueInfo, RegistryValueKind, ValueEnumerationResponse,
};
use crate::{Error, Result};

/// Provides read access to the Windows registry through the `StdRegProv` CIM class.
///
/// The provider either owns its session or borrows one. An owned session is
/// closed together with the provider; a borrowed session created with
/// `leave_open = true` survives it. Closing is explicit via
/// [`close`](CimRegistryProvider::close), idempotent, and also happens on drop.
///
/// Lifecycle: `Created -> Active -> Closed`. All operations are permitted while
/// active; after closing, every operation fails with [`Error::Closed`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use cim_registry::cim::CimSession;
/// use cim_registry::registry::{CimRegistryProvider, RegistryGetValueRequest, RegistryHive};
///
/// fn read_install_root(session: Arc<dyn CimSession>) -> cim_registry::Result<()> {
///     let provider = CimRegistryProvider::new(session);
///     let request = RegistryGetValueRequest::new(RegistryHive::LocalMachine)
///         .with_sub_key_name(r"Software\Microsoft\.NETFramework")
///         .with_value_name("InstallRoot");
///
///     let response = provider.get_string_value(&request)?;
///     if response.is_success() {
///         println!("InstallRoot: {:?}", response.value());
///     } else {
///         println!("provider returned code {}", response.return_code());
///     }
///     Ok(())
/// }
/// ```
pub struct CimRegistryProvider {
    session: Arc<dyn CimSession>,
    close_session: bool,
    closed: bool,
}

impl CimRegistryProvider {
    /// Creates a provider that owns `session` and closes it when the provider closes.
    pub fn new(session: Arc<dyn CimSession>) -> Self {
        CimRegistryProvider::with_session(session, false)
    }

    /// Creates a provider over a borrowed session.
    ///
    /// With `leave_open` set, closing the provider leaves the session untouched
    /// and the caller keeps responsibility for releasing it.
    pub fn with_session(session: Arc<dyn CimSession>, leave_open: bool) -> Self {
        CimRegistryProvider {
            session,
            close_session: !leave_open,
            closed: false,
        }
    }

    /// The name of the computer the underlying session is connected to.
    pub fn computer_name(&self) -> &str {
        self.session.computer_name()
    }

    /// Whether the provider has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closes the provider, releasing the session if it is owned.
    ///
    /// Idempotent: the second and later calls do nothing.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if self.close_session {
            self.session.close();
        }
    }

    /// Enumerates the direct subkeys of the requested key.
    ///
    /// A missing key yields return code 2 with empty `keys`; a key without
    /// subkeys yields return code 0 with empty `keys`.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn enumerate_keys(
        &self,
        request: &RegistryOperationRequest,
    ) -> Result<KeyEnumerationResponse> {
        self.ensure_open()?;

        let result = self.invoke(
            methods::ENUM_KEY,
            params::operation_parameters(request),
            request.operation_options(),
        )?;

        let keys = decode_out(&result, parameters::S_NAMES, "StringArray", |value| {
            value.as_string_array().map(<[String]>::to_vec)
        })?
        .unwrap_or_default();

        Ok(KeyEnumerationResponse::new(result.return_code(), keys))
    }

    /// Enumerates the value names of the requested key, paired with their kinds.
    ///
    /// Pairs preserve the provider's order. Type codes the provider did not
    /// supply decode to [`RegistryValueKind::Unknown`], so names and kinds
    /// always have matching length.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn enumerate_values(
        &self,
        request: &RegistryOperationRequest,
    ) -> Result<ValueEnumerationResponse> {
        self.ensure_open()?;

        let result = self.invoke(
            methods::ENUM_VALUES,
            params::operation_parameters(request),
            request.operation_options(),
        )?;

        let names = decode_out(&result, parameters::S_NAMES, "StringArray", |value| {
            value.as_string_array().map(<[String]>::to_vec)
        })?
        .unwrap_or_default();

        // Types is decoded leniently: a null, missing or short array pads with
        // Unknown rather than failing the whole enumeration.
        let type_codes: Vec<i32> = result
            .out_parameter(parameters::TYPES)
            .filter(|parameter| !parameter.is_null())
            .and_then(|parameter| parameter.value().as_i32_array())
            .map(<[i32]>::to_vec)
            .unwrap_or_default();

        let values = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let kind = type_codes
                    .get(index)
                    .copied()
                    .map(RegistryValueKind::from_code)
                    .unwrap_or(RegistryValueKind::Unknown);
                RegistryValueInfo::new(name, kind)
            })
            .collect();

        Ok(ValueEnumerationResponse::new(result.return_code(), values))
    }

    /// Reads a `REG_BINARY` value.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_binary_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<Vec<u8>>> {
        self.get_value(
            methods::GET_BINARY_VALUE,
            parameters::U_VALUE,
            "UInt8Array",
            request,
            |value| value.as_bytes().map(<[u8]>::to_vec),
        )
    }

    /// Reads a `REG_DWORD` value as a 32-bit unsigned integer.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_dword_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<u32>> {
        self.get_value(
            methods::GET_DWORD_VALUE,
            parameters::U_VALUE,
            "UInt32",
            request,
            CimValue::as_u32,
        )
    }

    /// Reads a `REG_EXPAND_SZ` value with its environment references expanded
    /// by the provider.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_expanded_string_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<String>> {
        self.get_value(
            methods::GET_EXPANDED_STRING_VALUE,
            parameters::S_VALUE,
            "String",
            request,
            |value| value.as_str().map(str::to_owned),
        )
    }

    /// Reads a `REG_MULTI_SZ` value.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_multi_string_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<Vec<String>>> {
        self.get_value(
            methods::GET_MULTI_STRING_VALUE,
            parameters::S_VALUE,
            "StringArray",
            request,
            |value| value.as_string_array().map(<[String]>::to_vec),
        )
    }

    /// Reads a `REG_QWORD` value as a 64-bit unsigned integer.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_qword_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<u64>> {
        self.get_value(
            methods::GET_QWORD_VALUE,
            parameters::U_VALUE,
            "UInt64",
            request,
            CimValue::as_u64,
        )
    }

    /// Reads a `REG_SZ` value.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](CimRegistryProvider::close), decode
    /// errors on malformed success results, or transport faults.
    pub fn get_string_value(
        &self,
        request: &RegistryGetValueRequest,
    ) -> Result<GetValueResponse<String>> {
        self.get_value(
            methods::GET_STRING_VALUE,
            parameters::S_VALUE,
            "String",
            request,
            |value| value.as_str().map(str::to_owned),
        )
    }

    fn get_value<T>(
        &self,
        method_name: &'static str,
        out_name: &'static str,
        expected: &'static str,
        request: &RegistryGetValueRequest,
        decode: impl Fn(&CimValue) -> Option<T>,
    ) -> Result<GetValueResponse<T>> {
        self.ensure_open()?;

        let result = self.invoke(
            method_name,
            params::get_value_parameters(request),
            request.operation().operation_options(),
        )?;

        let value = decode_out(&result, out_name, expected, decode)?;
        Ok(GetValueResponse::new(result.return_code(), value))
    }

    fn invoke(
        &self,
        method_name: &'static str,
        method_parameters: CimMethodParameters,
        options: CimOperationOptions,
    ) -> Result<CimMethodResult> {
        debug!(
            computer = self.session.computer_name(),
            class = CLASS_NAME,
            method = method_name,
            "invoking registry provider method"
        );

        let result = self.session.invoke_method(
            NAMESPACE,
            CLASS_NAME,
            method_name,
            &method_parameters,
            &options,
        )?;

        trace!(
            method = method_name,
            return_code = result.return_code(),
            "registry provider method returned"
        );

        Ok(result)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed(std::any::type_name::<Self>()));
        }
        Ok(())
    }
}

impl Drop for CimRegistryProvider {
    fn drop(&mut self) {
        self.close();
    }
}

/// Decodes one out-parameter of `result`.
///
/// Decode rules, in order:
/// - parameter present and null-flagged: absent (`Ok(None)`), whatever the return code
/// - parameter present with a decodable value: `Ok(Some(..))`
/// - parameter present with an alien value: error on success codes, absent on failure codes
/// - parameter missing entirely: error on success codes, absent on failure codes
fn decode_out<T>(
    result: &CimMethodResult,
    name: &'static str,
    expected: &'static str,
    decode: impl Fn(&CimValue) -> Option<T>,
) -> Result<Option<T>> {
    let succeeded = result.return_code() == ERROR_SUCCESS;

    let raw = match result.out_parameter(name) {
        Some(parameter) if parameter.is_null() => return Ok(None),
        Some(parameter) => parameter.value(),
        None if succeeded => return Err(Error::MissingOutParameter(name)),
        None => return Ok(None),
    };

    match decode(raw) {
        Some(value) => Ok(Some(value)),
        None if succeeded => Err(Error::UnexpectedValueType {
            name,
            expected,
            actual: raw.type_name(),
        }),
        None => Ok(None),
    }
}
