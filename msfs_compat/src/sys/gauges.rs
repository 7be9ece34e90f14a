//! `MSFS/Legacy/gauges.h` and the gauge entry points of `MSFS/MSFS.h`.

use super::types::*;

pub const PANEL_SERVICE_PRE_QUERY: u32 = 0;
pub const PANEL_SERVICE_POST_QUERY: u32 = 1;
pub const PANEL_SERVICE_PRE_INSTALL: u32 = 2;
pub const PANEL_SERVICE_POST_INSTALL: u32 = 3;
pub const PANEL_SERVICE_PRE_INITIALIZE: u32 = 4;
pub const PANEL_SERVICE_POST_INITIALIZE: u32 = 5;
pub const PANEL_SERVICE_PRE_UPDATE: u32 = 6;
pub const PANEL_SERVICE_POST_UPDATE: u32 = 7;
pub const PANEL_SERVICE_PRE_GENERATE: u32 = 8;
pub const PANEL_SERVICE_POST_GENERATE: u32 = 9;
pub const PANEL_SERVICE_PRE_DRAW: u32 = 10;
pub const PANEL_SERVICE_POST_DRAW: u32 = 11;
pub const PANEL_SERVICE_PRE_KILL: u32 = 12;
pub const PANEL_SERVICE_POST_KILL: u32 = 13;
pub const PANEL_SERVICE_CONNECT_TO_WINDOW: u32 = 14;
pub const PANEL_SERVICE_DISCONNECT: u32 = 15;
pub const PANEL_SERVICE_PANEL_OPEN: u32 = 16;
pub const PANEL_SERVICE_PANEL_CLOSE: u32 = 17;

pub const MOUSE_NONE: u32 = 0x0000_0000;
pub const MOUSE_RIGHTSINGLE: u32 = 0x8000_0000;
pub const MOUSE_MIDDLESINGLE: u32 = 0x4000_0000;
pub const MOUSE_LEFTSINGLE: u32 = 0x2000_0000;
pub const MOUSE_RIGHTDOUBLE: u32 = 0x1000_0000;
pub const MOUSE_MIDDLEDOUBLE: u32 = 0x0800_0000;
pub const MOUSE_LEFTDOUBLE: u32 = 0x0400_0000;
pub const MOUSE_RIGHTDRAG: u32 = 0x0200_0000;
pub const MOUSE_MIDDLEDRAG: u32 = 0x0100_0000;
pub const MOUSE_LEFTDRAG: u32 = 0x0080_0000;
pub const MOUSE_MOVE: u32 = 0x0040_0000;
pub const MOUSE_DOWN_REPEAT: u32 = 0x0020_0000;
pub const MOUSE_RIGHTRELEASE: u32 = 0x0008_0000;
pub const MOUSE_MIDDLERELEASE: u32 = 0x0004_0000;
pub const MOUSE_LEFTRELEASE: u32 = 0x0002_0000;
pub const MOUSE_WHEEL_FLIP: u32 = 0x0001_0000;
pub const MOUSE_WHEEL_SKIP: u32 = 0x0000_8000;
pub const MOUSE_WHEEL_UP: u32 = 0x0000_4000;
pub const MOUSE_WHEEL_DOWN: u32 = 0x0000_2000;
pub const MOUSE_MOVE_REPEAT: u32 = 0x0000_1000;
pub const MOUSE_LEAVE: u32 = 0x0000_0800;

/// Passed as `p_data` with the draw service ids.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct sGaugeDrawData {
    pub mx: f64,
    pub my: f64,
    pub t: f64,
    pub dt: f64,
    pub winWidth: i32,
    pub winHeight: i32,
    pub fbWidth: i32,
    pub fbHeight: i32,
}

imports! {
    pub fn aircraft_varget(simvar: ENUM, units: ENUM, index: SINT32) -> FLOAT64 => 0.0;
    pub fn get_aircraft_var_enum(simvar: PCSTRINGZ) -> ENUM => -1;
    pub fn get_units_enum(unitname: PCSTRINGZ) -> ENUM => -1;
    pub fn execute_calculator_code(
        code: PCSTRINGZ,
        fvalue: *mut FLOAT64,
        ivalue: *mut SINT32,
        svalue: *mut PCSTRINGZ,
    ) -> BOOL => FALSE;
    pub fn gauge_calculator_code_precompile(
        pCompiled: *mut PCSTRINGZ,
        pCompiledSize: *mut UINT32,
        source: PCSTRINGZ,
    ) -> BOOL => FALSE;

    pub fn register_named_variable(name: PCSTRINGZ) -> ID => -1;
    pub fn check_named_variable(name: PCSTRINGZ) -> ID => -1;
    pub fn get_name_of_named_variable(id: ID) -> PCSTRINGZ => std::ptr::null();
    pub fn get_named_variable_value(id: ID) -> FLOAT64 => 0.0;
    pub fn get_named_variable_typed_value(id: ID, units: ENUM) -> FLOAT64 => 0.0;
    pub fn set_named_variable_value(id: ID, value: FLOAT64) => ();
    pub fn set_named_variable_typed_value(id: ID, value: FLOAT64, units: ENUM) => ();

    pub fn trigger_key_event(event_id: ID32, value: UINT32) => ();
    pub fn trigger_key_event_EX1(
        event_id: ID32,
        value0: UINT32,
        value1: UINT32,
        value2: UINT32,
        value3: UINT32,
        value4: UINT32,
    ) => ();
}
