//! `MSFS/MSFS_CommBus.h`.

use std::ffi::{c_char, c_uint, c_void};

pub type FsCommBusBroadcastFlags = u32;
pub const FsCommBusBroadcast_JS: FsCommBusBroadcastFlags = 1 << 0;
pub const FsCommBusBroadcast_Wasm: FsCommBusBroadcastFlags = 1 << 1;
pub const FsCommBusBroadcast_WasmSelfCall: FsCommBusBroadcastFlags = 1 << 2;
pub const FsCommBusBroadcast_Default: FsCommBusBroadcastFlags =
    FsCommBusBroadcast_JS | FsCommBusBroadcast_Wasm;
pub const FsCommBusBroadcast_AllWasm: FsCommBusBroadcastFlags =
    FsCommBusBroadcast_Wasm | FsCommBusBroadcast_WasmSelfCall;
pub const FsCommBusBroadcast_All: FsCommBusBroadcastFlags =
    FsCommBusBroadcast_JS | FsCommBusBroadcast_Wasm | FsCommBusBroadcast_WasmSelfCall;

pub type FsCommBusWasmCallback =
    Option<unsafe extern "C" fn(args: *const c_char, size: c_uint, ctx: *mut c_void)>;

imports! {
    pub fn fsCommBusRegister(
        eventName: *const c_char,
        callback: FsCommBusWasmCallback,
        ctx: *mut c_void,
    ) -> bool => false;
    pub fn fsCommBusUnregister(eventName: *const c_char, callback: FsCommBusWasmCallback) -> i32 => 0;
    pub fn fsCommBusUnregisterAll() => ();
    pub fn fsCommBusCall(
        eventName: *const c_char,
        buf: *const c_char,
        bufSize: c_uint,
        called: FsCommBusBroadcastFlags,
    ) -> bool => false;
}
