//! Raw bindings to the MSFS SDK.
//!
//! This is the Rust side of the SDK compatibility shim: the Windows primitive
//! types the SDK headers expect, the constants and `#[repr(C)]` structs they
//! declare, and every function the simulator exports to WASM modules.
//!
//! On `wasm32` targets the functions are imported from the simulator with the
//! C calling convention. On every other target each import is backed by a
//! fallback with the identical signature which reports the feature as
//! unavailable, so that crates built on top of these bindings compile, link
//! and can be unit tested on a desktop host.
//!
//! With the `simconnect` feature the SimConnect table is linked against the
//! desktop SimConnect client library instead, so a module can talk to a
//! running simulator from a desktop process.
//!
//! Enable the `bindgen` feature to additionally generate the complete SDK
//! surface into [`sdk`] from an installed SDK.
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::missing_safety_doc)]

/// Declares a table of simulator imports.
///
/// Each entry names the value its host fallback returns. A table opened with
/// `#![link(name = "SimConnect")]` links the desktop client library instead of
/// the fallbacks when the `simconnect` feature is enabled.
macro_rules! imports {
    (
        #![link(name = "SimConnect")]
        $(
            $(#[$meta:meta])*
            pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? => $fallback:expr;
        )*
    ) => {
        #[cfg(target_arch = "wasm32")]
        extern "C" {
            $(
                $(#[$meta])*
                pub fn $name($($arg: $ty),*) $(-> $ret)?;
            )*
        }

        #[cfg(all(not(target_arch = "wasm32"), feature = "simconnect"))]
        #[link(name = "SimConnect")]
        extern "C" {
            $(
                $(#[$meta])*
                pub fn $name($($arg: $ty),*) $(-> $ret)?;
            )*
        }

        $(
            #[cfg(all(not(target_arch = "wasm32"), not(feature = "simconnect")))]
            $(#[$meta])*
            #[allow(unused_variables)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
                $fallback
            }
        )*
    };
    (
        $(
            $(#[$meta:meta])*
            pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? => $fallback:expr;
        )*
    ) => {
        #[cfg(target_arch = "wasm32")]
        extern "C" {
            $(
                $(#[$meta])*
                pub fn $name($($arg: $ty),*) $(-> $ret)?;
            )*
        }

        $(
            #[cfg(not(target_arch = "wasm32"))]
            $(#[$meta])*
            #[allow(unused_variables)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
                $fallback
            }
        )*
    };
}

mod commbus;
mod gauges;
mod nanovg;
mod network;
mod simconnect;
mod types;
mod vars;

pub use commbus::*;
pub use gauges::*;
pub use nanovg::*;
pub use network::*;
pub use simconnect::*;
pub use types::*;
pub use vars::*;

/// The complete SDK surface generated by bindgen from `bindgen_support/wrapper.h`.
#[cfg(feature = "bindgen")]
#[allow(dead_code, deref_nullptr, improper_ctypes, clippy::all)]
pub mod sdk {
    include!(concat!(env!("OUT_DIR"), "/sdk_bindings.rs"));
}

/// `true` when the imports resolve against a running simulator.
pub const fn is_native() -> bool {
    cfg!(target_arch = "wasm32")
}

/// `true` when SimConnect calls reach a simulator, either as WASM imports or
/// through the desktop client library.
pub const fn has_simconnect() -> bool {
    cfg!(any(target_arch = "wasm32", feature = "simconnect"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn windows_primitives_have_sdk_widths() {
        assert_eq!(size_of::<BYTE>(), 1);
        assert_eq!(size_of::<WORD>(), 2);
        assert_eq!(size_of::<DWORD>(), 4);
        assert_eq!(size_of::<BOOL>(), 4);
        assert_eq!(size_of::<HRESULT>(), 4);
        assert_eq!(size_of::<HANDLE>(), 8);
        assert_eq!(size_of::<GUID>(), 16);
        assert_eq!(size_of::<FLOAT64>(), 8);
        assert_eq!(size_of::<ENUM>(), 4);
    }

    #[test]
    fn simconnect_structs_are_packed() {
        assert_eq!(size_of::<SIMCONNECT_RECV>(), 12);
        assert_eq!(size_of::<SIMCONNECT_RECV_EVENT>(), 24);
        assert_eq!(size_of::<SIMCONNECT_RECV_EVENT_EX1>(), 40);
        assert_eq!(size_of::<SIMCONNECT_RECV_SIMOBJECT_DATA>(), 44);
        assert_eq!(size_of::<SIMCONNECT_RECV_CLIENT_DATA>(), 44);
        assert_eq!(size_of::<SIMCONNECT_RECV_OPEN>(), 12 + 256 + 10 * 4);
        assert_eq!(size_of::<SIMCONNECT_DATA_FACILITY_AIRPORT>(), 6 + 3 + 3 * 8);
        assert_eq!(size_of::<SIMCONNECT_DATA_INITPOSITION>(), 6 * 8 + 2 * 4);
        assert_eq!(size_of::<SIMCONNECT_RECV_FACILITY_DATA>(), 12 + 8 * 4);
        assert_eq!(size_of::<SIMCONNECT_RECV_FACILITY_DATA_END>(), 16);
        assert_eq!(align_of::<SIMCONNECT_RECV_SIMOBJECT_DATA>(), 1);
    }

    #[test]
    fn gauge_draw_data_is_c_layout() {
        assert_eq!(size_of::<sGaugeDrawData>(), 4 * 8 + 4 * 4);
    }

    #[test]
    fn var_params_are_packed_to_four() {
        assert_eq!(align_of::<FsVarParamVariant>(), 4);
        assert_eq!(size_of::<FsVarParamVariant>(), 12);
    }

    #[test]
    #[cfg(not(feature = "simconnect"))]
    fn simconnect_fallbacks_fail() {
        assert!(!has_simconnect());
        unsafe {
            let mut handle = 0;
            assert_eq!(
                SimConnect_Open(&mut handle, std::ptr::null(), std::ptr::null_mut(), 0, 0, 0),
                E_FAIL
            );
            assert_eq!(
                SimConnect_AddToFacilityDefinition(0, 0, c"OPEN AIRPORT".as_ptr()),
                E_FAIL
            );
        }
    }

    #[test]
    fn fallbacks_report_unavailable() {
        assert!(!is_native());
        unsafe {
            assert_eq!(get_aircraft_var_enum(c"PLANE ALTITUDE".as_ptr()), -1);
            assert_eq!(get_units_enum(c"feet".as_ptr()), -1);
            assert_eq!(aircraft_varget(0, 0, 0), 0.0);
            assert_eq!(
                execute_calculator_code(
                    c"(A:PLANE ALTITUDE, feet)".as_ptr(),
                    std::ptr::null_mut(),
                    std::ptr::null_mut(),
                    std::ptr::null_mut()
                ),
                FALSE
            );
            assert!(nvgCreateInternal(std::ptr::null_mut()).is_null());
            assert!(!fsCommBusCall(c"EVENT".as_ptr(), std::ptr::null(), 0, FsCommBusBroadcast_Default));
        }
    }
}
