//! `MSFS/MSFS_Vars.h` and `MSFS/MSFS_Events.h`, the 2024 replacement for the
//! legacy variable functions.

use std::ffi::{c_char, c_uint};

pub type FsSimVarId = i32;
pub type FsUnitId = i32;
pub type FsNamedVarId = i32;
pub type FsEventId = i32;
pub type FsCRC = u64;

pub type FsVarError = i32;
pub const FS_VAR_ERROR_NONE: FsVarError = 0;

pub type eFsVarParamType = u8;
pub const FsVarParamTypeInteger: eFsVarParamType = 0;
pub const FsVarParamTypeString: eFsVarParamType = 1;
pub const FsVarParamTypeCRC: eFsVarParamType = 2;

#[repr(C, packed(4))]
#[derive(Clone, Copy)]
pub union FsVarParamValue {
    pub intValue: c_uint,
    pub stringValue: *const c_char,
    pub CRCValue: FsCRC,
}

#[repr(C, packed(4))]
#[derive(Clone, Copy)]
pub struct FsVarParamVariant {
    pub type_: eFsVarParamType,
    pub value: FsVarParamValue,
}

#[repr(C, packed(4))]
#[derive(Clone, Copy)]
pub struct FsVarParamArray {
    pub size: c_uint,
    pub array: *mut FsVarParamVariant,
}

imports! {
    pub fn fsVarsGetAircraftVarId(simvar: *const c_char) -> FsSimVarId => -1;
    pub fn fsVarsGetUnitId(unitName: *const c_char) -> FsUnitId => -1;
    pub fn fsVarsAircraftVarGet(
        simvar: FsSimVarId,
        unit: FsUnitId,
        param: FsVarParamArray,
        result: *mut f64,
    ) -> FsVarError => -1;
    pub fn fsVarsAircraftVarSet(
        simvar: FsSimVarId,
        unit: FsUnitId,
        param: FsVarParamArray,
        value: f64,
    ) -> FsVarError => -1;
    pub fn fsVarsRegisterNamedVar(name: *const c_char) -> FsNamedVarId => -1;
    pub fn fsVarsGetRegisteredNamedVarId(name: *const c_char) -> FsNamedVarId => -1;
    pub fn fsVarsNamedVarGet(var: FsNamedVarId, unit: FsUnitId, result: *mut f64) -> FsVarError => -1;
    pub fn fsVarsNamedVarSet(var: FsNamedVarId, unit: FsUnitId, value: f64) -> FsVarError => -1;

    pub fn fsEventsGetKeyEventId(name: *const c_char) -> FsEventId => -1;
    pub fn fsEventsTriggerKeyEvent(eventId: FsEventId, param: FsVarParamArray) -> FsVarError => -1;
}
