//! Windows primitive types as the SDK headers declare them for WASM.

use std::ffi::{c_char, c_void};

pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type BOOL = i32;
pub type INT = i32;
pub type UINT = u32;
pub type LONG = i32;
pub type ULONG = u32;
pub type ULONGLONG = u64;
pub type FLOAT = f32;
pub type HRESULT = LONG;

/// SimConnect handles are plain integers in the WASM SDK.
pub type HANDLE = u64;
pub type HWND = *mut c_void;
pub type LPVOID = *mut c_void;
pub type LPCSTR = *const c_char;
pub type LPSTR = *mut c_char;

pub const TRUE: BOOL = 1;
pub const FALSE: BOOL = 0;
pub const MAX_PATH: usize = 260;

pub const S_OK: HRESULT = 0;
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as HRESULT;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GUID {
    pub Data1: DWORD,
    pub Data2: WORD,
    pub Data3: WORD,
    pub Data4: [BYTE; 8],
}

// Legacy/gauges.h scalar aliases.
pub type UINT8 = u8;
pub type SINT8 = i8;
pub type UINT16 = u16;
pub type SINT16 = i16;
pub type UINT32 = u32;
pub type SINT32 = i32;
pub type UINT64 = u64;
pub type SINT64 = i64;
pub type FLOAT32 = f32;
pub type FLOAT64 = f64;

/// Simulation variable or unit enumeration. `-1` when unknown.
pub type ENUM = SINT32;
pub type ID = SINT32;
pub type ID32 = UINT32;
pub type PCSTRINGZ = *const c_char;
pub type PSTRINGZ = *mut c_char;

/// Opaque context handed to gauge callbacks, used to create render contexts.
pub type FsContext = *mut c_void;

/// Converts a Rust `bool` to a Windows `BOOL`.
pub const fn to_bool(value: bool) -> BOOL {
    if value {
        TRUE
    } else {
        FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e_fail_is_negative() {
        assert!(E_FAIL < 0);
        assert_eq!(E_FAIL as u32, 0x8000_4005);
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(to_bool(true), TRUE);
        assert_eq!(to_bool(false), FALSE);
    }
}
