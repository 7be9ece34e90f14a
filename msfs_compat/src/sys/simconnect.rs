//! `SimConnect.h` as shipped with the WASM SDK.
//!
//! SimConnect declares its structs under `#pragma pack(1)`, hence `packed`.

use super::types::*;
use std::ffi::{c_char, c_void};

pub type SIMCONNECT_OBJECT_ID = DWORD;
pub type SIMCONNECT_DATA_DEFINITION_ID = DWORD;
pub type SIMCONNECT_DATA_REQUEST_ID = DWORD;
pub type SIMCONNECT_CLIENT_EVENT_ID = DWORD;
pub type SIMCONNECT_NOTIFICATION_GROUP_ID = DWORD;
pub type SIMCONNECT_CLIENT_DATA_ID = DWORD;
pub type SIMCONNECT_CLIENT_DATA_DEFINITION_ID = DWORD;

pub const SIMCONNECT_UNUSED: DWORD = DWORD::MAX;
pub const SIMCONNECT_OBJECT_ID_USER: SIMCONNECT_OBJECT_ID = 0;

pub type SIMCONNECT_DATATYPE = u32;
pub const SIMCONNECT_DATATYPE_INVALID: SIMCONNECT_DATATYPE = 0;
pub const SIMCONNECT_DATATYPE_INT32: SIMCONNECT_DATATYPE = 1;
pub const SIMCONNECT_DATATYPE_INT64: SIMCONNECT_DATATYPE = 2;
pub const SIMCONNECT_DATATYPE_FLOAT32: SIMCONNECT_DATATYPE = 3;
pub const SIMCONNECT_DATATYPE_FLOAT64: SIMCONNECT_DATATYPE = 4;
pub const SIMCONNECT_DATATYPE_STRING8: SIMCONNECT_DATATYPE = 5;
pub const SIMCONNECT_DATATYPE_STRING32: SIMCONNECT_DATATYPE = 6;
pub const SIMCONNECT_DATATYPE_STRING64: SIMCONNECT_DATATYPE = 7;
pub const SIMCONNECT_DATATYPE_STRING128: SIMCONNECT_DATATYPE = 8;
pub const SIMCONNECT_DATATYPE_STRING256: SIMCONNECT_DATATYPE = 9;
pub const SIMCONNECT_DATATYPE_STRING260: SIMCONNECT_DATATYPE = 10;
pub const SIMCONNECT_DATATYPE_STRINGV: SIMCONNECT_DATATYPE = 11;
pub const SIMCONNECT_DATATYPE_INITPOSITION: SIMCONNECT_DATATYPE = 12;
pub const SIMCONNECT_DATATYPE_MARKERSTATE: SIMCONNECT_DATATYPE = 13;
pub const SIMCONNECT_DATATYPE_WAYPOINT: SIMCONNECT_DATATYPE = 14;
pub const SIMCONNECT_DATATYPE_LATLONALT: SIMCONNECT_DATATYPE = 15;
pub const SIMCONNECT_DATATYPE_XYZ: SIMCONNECT_DATATYPE = 16;

pub type SIMCONNECT_PERIOD = u32;
pub const SIMCONNECT_PERIOD_NEVER: SIMCONNECT_PERIOD = 0;
pub const SIMCONNECT_PERIOD_ONCE: SIMCONNECT_PERIOD = 1;
pub const SIMCONNECT_PERIOD_VISUAL_FRAME: SIMCONNECT_PERIOD = 2;
pub const SIMCONNECT_PERIOD_SIM_FRAME: SIMCONNECT_PERIOD = 3;
pub const SIMCONNECT_PERIOD_SECOND: SIMCONNECT_PERIOD = 4;

pub type SIMCONNECT_CLIENT_DATA_PERIOD = u32;
pub const SIMCONNECT_CLIENT_DATA_PERIOD_NEVER: SIMCONNECT_CLIENT_DATA_PERIOD = 0;
pub const SIMCONNECT_CLIENT_DATA_PERIOD_ONCE: SIMCONNECT_CLIENT_DATA_PERIOD = 1;
pub const SIMCONNECT_CLIENT_DATA_PERIOD_VISUAL_FRAME: SIMCONNECT_CLIENT_DATA_PERIOD = 2;
pub const SIMCONNECT_CLIENT_DATA_PERIOD_ON_SET: SIMCONNECT_CLIENT_DATA_PERIOD = 3;
pub const SIMCONNECT_CLIENT_DATA_PERIOD_SECOND: SIMCONNECT_CLIENT_DATA_PERIOD = 4;

pub type SIMCONNECT_DATA_REQUEST_FLAG = DWORD;
pub const SIMCONNECT_DATA_REQUEST_FLAG_DEFAULT: SIMCONNECT_DATA_REQUEST_FLAG = 0;
pub const SIMCONNECT_DATA_REQUEST_FLAG_CHANGED: SIMCONNECT_DATA_REQUEST_FLAG = 1;
pub const SIMCONNECT_DATA_REQUEST_FLAG_TAGGED: SIMCONNECT_DATA_REQUEST_FLAG = 2;

pub type SIMCONNECT_CLIENT_DATA_REQUEST_FLAG = DWORD;
pub const SIMCONNECT_CLIENT_DATA_REQUEST_FLAG_DEFAULT: SIMCONNECT_CLIENT_DATA_REQUEST_FLAG = 0;
pub const SIMCONNECT_CLIENT_DATA_REQUEST_FLAG_CHANGED: SIMCONNECT_CLIENT_DATA_REQUEST_FLAG = 1;
pub const SIMCONNECT_CLIENT_DATA_REQUEST_FLAG_TAGGED: SIMCONNECT_CLIENT_DATA_REQUEST_FLAG = 2;

pub type SIMCONNECT_CREATE_CLIENT_DATA_FLAG = DWORD;
pub const SIMCONNECT_CREATE_CLIENT_DATA_FLAG_DEFAULT: SIMCONNECT_CREATE_CLIENT_DATA_FLAG = 0;
pub const SIMCONNECT_CREATE_CLIENT_DATA_FLAG_READ_ONLY: SIMCONNECT_CREATE_CLIENT_DATA_FLAG = 1;

pub const SIMCONNECT_GROUP_PRIORITY_HIGHEST: DWORD = 1;
pub const SIMCONNECT_GROUP_PRIORITY_HIGHEST_MASKABLE: DWORD = 10_000_000;
pub const SIMCONNECT_GROUP_PRIORITY_STANDARD: DWORD = 1_900_000_000;
pub const SIMCONNECT_GROUP_PRIORITY_DEFAULT: DWORD = 2_000_000_000;
pub const SIMCONNECT_GROUP_PRIORITY_LOWEST: DWORD = 4_000_000_000;

pub const SIMCONNECT_STATE_OFF: DWORD = 0;
pub const SIMCONNECT_STATE_ON: DWORD = 1;

pub type SIMCONNECT_SIMOBJECT_TYPE = u32;
pub const SIMCONNECT_SIMOBJECT_TYPE_USER: SIMCONNECT_SIMOBJECT_TYPE = 0;
pub const SIMCONNECT_SIMOBJECT_TYPE_ALL: SIMCONNECT_SIMOBJECT_TYPE = 1;
pub const SIMCONNECT_SIMOBJECT_TYPE_AIRCRAFT: SIMCONNECT_SIMOBJECT_TYPE = 2;
pub const SIMCONNECT_SIMOBJECT_TYPE_HELICOPTER: SIMCONNECT_SIMOBJECT_TYPE = 3;
pub const SIMCONNECT_SIMOBJECT_TYPE_BOAT: SIMCONNECT_SIMOBJECT_TYPE = 4;
pub const SIMCONNECT_SIMOBJECT_TYPE_GROUND: SIMCONNECT_SIMOBJECT_TYPE = 5;

pub type SIMCONNECT_FACILITY_LIST_TYPE = u32;
pub const SIMCONNECT_FACILITY_LIST_TYPE_AIRPORT: SIMCONNECT_FACILITY_LIST_TYPE = 0;
pub const SIMCONNECT_FACILITY_LIST_TYPE_WAYPOINT: SIMCONNECT_FACILITY_LIST_TYPE = 1;
pub const SIMCONNECT_FACILITY_LIST_TYPE_NDB: SIMCONNECT_FACILITY_LIST_TYPE = 2;
pub const SIMCONNECT_FACILITY_LIST_TYPE_VOR: SIMCONNECT_FACILITY_LIST_TYPE = 3;

pub type SIMCONNECT_FACILITY_DATA_TYPE = u32;
pub const SIMCONNECT_FACILITY_DATA_AIRPORT: SIMCONNECT_FACILITY_DATA_TYPE = 0;
pub const SIMCONNECT_FACILITY_DATA_RUNWAY: SIMCONNECT_FACILITY_DATA_TYPE = 1;
pub const SIMCONNECT_FACILITY_DATA_START: SIMCONNECT_FACILITY_DATA_TYPE = 2;
pub const SIMCONNECT_FACILITY_DATA_FREQUENCY: SIMCONNECT_FACILITY_DATA_TYPE = 3;
pub const SIMCONNECT_FACILITY_DATA_HELIPAD: SIMCONNECT_FACILITY_DATA_TYPE = 4;
pub const SIMCONNECT_FACILITY_DATA_APPROACH: SIMCONNECT_FACILITY_DATA_TYPE = 5;
pub const SIMCONNECT_FACILITY_DATA_APPROACH_TRANSITION: SIMCONNECT_FACILITY_DATA_TYPE = 6;
pub const SIMCONNECT_FACILITY_DATA_APPROACH_LEG: SIMCONNECT_FACILITY_DATA_TYPE = 7;
pub const SIMCONNECT_FACILITY_DATA_FINAL_APPROACH_LEG: SIMCONNECT_FACILITY_DATA_TYPE = 8;
pub const SIMCONNECT_FACILITY_DATA_MISSED_APPROACH_LEG: SIMCONNECT_FACILITY_DATA_TYPE = 9;
pub const SIMCONNECT_FACILITY_DATA_DEPARTURE: SIMCONNECT_FACILITY_DATA_TYPE = 10;
pub const SIMCONNECT_FACILITY_DATA_ARRIVAL: SIMCONNECT_FACILITY_DATA_TYPE = 11;
pub const SIMCONNECT_FACILITY_DATA_RUNWAY_TRANSITION: SIMCONNECT_FACILITY_DATA_TYPE = 12;
pub const SIMCONNECT_FACILITY_DATA_ENROUTE_TRANSITION: SIMCONNECT_FACILITY_DATA_TYPE = 13;
pub const SIMCONNECT_FACILITY_DATA_TAXI_POINT: SIMCONNECT_FACILITY_DATA_TYPE = 14;
pub const SIMCONNECT_FACILITY_DATA_TAXI_PARKING: SIMCONNECT_FACILITY_DATA_TYPE = 15;
pub const SIMCONNECT_FACILITY_DATA_TAXI_PATH: SIMCONNECT_FACILITY_DATA_TYPE = 16;
pub const SIMCONNECT_FACILITY_DATA_TAXI_NAME: SIMCONNECT_FACILITY_DATA_TYPE = 17;
pub const SIMCONNECT_FACILITY_DATA_JETWAY: SIMCONNECT_FACILITY_DATA_TYPE = 18;
pub const SIMCONNECT_FACILITY_DATA_VOR: SIMCONNECT_FACILITY_DATA_TYPE = 19;
pub const SIMCONNECT_FACILITY_DATA_NDB: SIMCONNECT_FACILITY_DATA_TYPE = 20;
pub const SIMCONNECT_FACILITY_DATA_WAYPOINT: SIMCONNECT_FACILITY_DATA_TYPE = 21;
pub const SIMCONNECT_FACILITY_DATA_ROUTE: SIMCONNECT_FACILITY_DATA_TYPE = 22;

pub type SIMCONNECT_RECV_ID = u32;
pub const SIMCONNECT_RECV_ID_NULL: SIMCONNECT_RECV_ID = 0;
pub const SIMCONNECT_RECV_ID_EXCEPTION: SIMCONNECT_RECV_ID = 1;
pub const SIMCONNECT_RECV_ID_OPEN: SIMCONNECT_RECV_ID = 2;
pub const SIMCONNECT_RECV_ID_QUIT: SIMCONNECT_RECV_ID = 3;
pub const SIMCONNECT_RECV_ID_EVENT: SIMCONNECT_RECV_ID = 4;
pub const SIMCONNECT_RECV_ID_EVENT_OBJECT_ADDREMOVE: SIMCONNECT_RECV_ID = 5;
pub const SIMCONNECT_RECV_ID_EVENT_FILENAME: SIMCONNECT_RECV_ID = 6;
pub const SIMCONNECT_RECV_ID_EVENT_FRAME: SIMCONNECT_RECV_ID = 7;
pub const SIMCONNECT_RECV_ID_SIMOBJECT_DATA: SIMCONNECT_RECV_ID = 8;
pub const SIMCONNECT_RECV_ID_SIMOBJECT_DATA_BYTYPE: SIMCONNECT_RECV_ID = 9;
pub const SIMCONNECT_RECV_ID_WEATHER_OBSERVATION: SIMCONNECT_RECV_ID = 10;
pub const SIMCONNECT_RECV_ID_CLOUD_STATE: SIMCONNECT_RECV_ID = 11;
pub const SIMCONNECT_RECV_ID_ASSIGNED_OBJECT_ID: SIMCONNECT_RECV_ID = 12;
pub const SIMCONNECT_RECV_ID_RESERVED_KEY: SIMCONNECT_RECV_ID = 13;
pub const SIMCONNECT_RECV_ID_CUSTOM_ACTION: SIMCONNECT_RECV_ID = 14;
pub const SIMCONNECT_RECV_ID_SYSTEM_STATE: SIMCONNECT_RECV_ID = 15;
pub const SIMCONNECT_RECV_ID_CLIENT_DATA: SIMCONNECT_RECV_ID = 16;
pub const SIMCONNECT_RECV_ID_EVENT_WEATHER_MODE: SIMCONNECT_RECV_ID = 17;
pub const SIMCONNECT_RECV_ID_AIRPORT_LIST: SIMCONNECT_RECV_ID = 18;
pub const SIMCONNECT_RECV_ID_VOR_LIST: SIMCONNECT_RECV_ID = 19;
pub const SIMCONNECT_RECV_ID_NDB_LIST: SIMCONNECT_RECV_ID = 20;
pub const SIMCONNECT_RECV_ID_WAYPOINT_LIST: SIMCONNECT_RECV_ID = 21;
pub const SIMCONNECT_RECV_ID_EVENT_MULTIPLAYER_SERVER_STARTED: SIMCONNECT_RECV_ID = 22;
pub const SIMCONNECT_RECV_ID_EVENT_MULTIPLAYER_CLIENT_STARTED: SIMCONNECT_RECV_ID = 23;
pub const SIMCONNECT_RECV_ID_EVENT_MULTIPLAYER_SESSION_ENDED: SIMCONNECT_RECV_ID = 24;
pub const SIMCONNECT_RECV_ID_EVENT_RACE_END: SIMCONNECT_RECV_ID = 25;
pub const SIMCONNECT_RECV_ID_EVENT_RACE_LAP: SIMCONNECT_RECV_ID = 26;
pub const SIMCONNECT_RECV_ID_EVENT_EX1: SIMCONNECT_RECV_ID = 27;
pub const SIMCONNECT_RECV_ID_FACILITY_DATA: SIMCONNECT_RECV_ID = 28;
pub const SIMCONNECT_RECV_ID_FACILITY_DATA_END: SIMCONNECT_RECV_ID = 29;
pub const SIMCONNECT_RECV_ID_FACILITY_MINIMAL_LIST: SIMCONNECT_RECV_ID = 30;

pub type SIMCONNECT_EXCEPTION = DWORD;
pub const SIMCONNECT_EXCEPTION_NONE: SIMCONNECT_EXCEPTION = 0;
pub const SIMCONNECT_EXCEPTION_ERROR: SIMCONNECT_EXCEPTION = 1;
pub const SIMCONNECT_EXCEPTION_SIZE_MISMATCH: SIMCONNECT_EXCEPTION = 2;
pub const SIMCONNECT_EXCEPTION_UNRECOGNIZED_ID: SIMCONNECT_EXCEPTION = 3;
pub const SIMCONNECT_EXCEPTION_UNOPENED: SIMCONNECT_EXCEPTION = 4;
pub const SIMCONNECT_EXCEPTION_VERSION_MISMATCH: SIMCONNECT_EXCEPTION = 5;
pub const SIMCONNECT_EXCEPTION_TOO_MANY_GROUPS: SIMCONNECT_EXCEPTION = 6;
pub const SIMCONNECT_EXCEPTION_NAME_UNRECOGNIZED: SIMCONNECT_EXCEPTION = 7;
pub const SIMCONNECT_EXCEPTION_TOO_MANY_EVENT_NAMES: SIMCONNECT_EXCEPTION = 8;
pub const SIMCONNECT_EXCEPTION_EVENT_ID_DUPLICATE: SIMCONNECT_EXCEPTION = 9;
pub const SIMCONNECT_EXCEPTION_TOO_MANY_MAPS: SIMCONNECT_EXCEPTION = 10;
pub const SIMCONNECT_EXCEPTION_TOO_MANY_OBJECTS: SIMCONNECT_EXCEPTION = 11;
pub const SIMCONNECT_EXCEPTION_TOO_MANY_REQUESTS: SIMCONNECT_EXCEPTION = 12;
pub const SIMCONNECT_EXCEPTION_INVALID_DATA_TYPE: SIMCONNECT_EXCEPTION = 18;
pub const SIMCONNECT_EXCEPTION_INVALID_DATA_SIZE: SIMCONNECT_EXCEPTION = 19;
pub const SIMCONNECT_EXCEPTION_DATA_ERROR: SIMCONNECT_EXCEPTION = 20;
pub const SIMCONNECT_EXCEPTION_INVALID_ARRAY: SIMCONNECT_EXCEPTION = 21;
pub const SIMCONNECT_EXCEPTION_CREATE_OBJECT_FAILED: SIMCONNECT_EXCEPTION = 22;
pub const SIMCONNECT_EXCEPTION_LOAD_FLIGHTPLAN_FAILED: SIMCONNECT_EXCEPTION = 23;
pub const SIMCONNECT_EXCEPTION_OPERATION_INVALID_FOR_OBJECT_TYPE: SIMCONNECT_EXCEPTION = 24;
pub const SIMCONNECT_EXCEPTION_ILLEGAL_OPERATION: SIMCONNECT_EXCEPTION = 25;
pub const SIMCONNECT_EXCEPTION_ALREADY_SUBSCRIBED: SIMCONNECT_EXCEPTION = 26;
pub const SIMCONNECT_EXCEPTION_INVALID_ENUM: SIMCONNECT_EXCEPTION = 27;
pub const SIMCONNECT_EXCEPTION_DEFINITION_ERROR: SIMCONNECT_EXCEPTION = 28;
pub const SIMCONNECT_EXCEPTION_DUPLICATE_ID: SIMCONNECT_EXCEPTION = 29;
pub const SIMCONNECT_EXCEPTION_DATUM_ID: SIMCONNECT_EXCEPTION = 30;
pub const SIMCONNECT_EXCEPTION_OUT_OF_BOUNDS: SIMCONNECT_EXCEPTION = 31;
pub const SIMCONNECT_EXCEPTION_ALREADY_CREATED: SIMCONNECT_EXCEPTION = 32;
pub const SIMCONNECT_EXCEPTION_OBJECT_OUTSIDE_REALITY_BUBBLE: SIMCONNECT_EXCEPTION = 33;

#[repr(C, packed)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SIMCONNECT_RECV {
    pub dwSize: DWORD,
    pub dwVersion: DWORD,
    pub dwID: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_EXCEPTION {
    pub _base: SIMCONNECT_RECV,
    pub dwException: DWORD,
    pub dwSendID: DWORD,
    pub dwIndex: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_OPEN {
    pub _base: SIMCONNECT_RECV,
    pub szApplicationName: [c_char; 256],
    pub dwApplicationVersionMajor: DWORD,
    pub dwApplicationVersionMinor: DWORD,
    pub dwApplicationBuildMajor: DWORD,
    pub dwApplicationBuildMinor: DWORD,
    pub dwSimConnectVersionMajor: DWORD,
    pub dwSimConnectVersionMinor: DWORD,
    pub dwSimConnectBuildMajor: DWORD,
    pub dwSimConnectBuildMinor: DWORD,
    pub dwReserved1: DWORD,
    pub dwReserved2: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_QUIT {
    pub _base: SIMCONNECT_RECV,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_EVENT {
    pub _base: SIMCONNECT_RECV,
    pub uGroupID: DWORD,
    pub uEventID: DWORD,
    pub dwData: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_EVENT_EX1 {
    pub _base: SIMCONNECT_RECV,
    pub uGroupID: DWORD,
    pub uEventID: DWORD,
    pub dwData0: DWORD,
    pub dwData1: DWORD,
    pub dwData2: DWORD,
    pub dwData3: DWORD,
    pub dwData4: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_EVENT_FILENAME {
    pub _base: SIMCONNECT_RECV_EVENT,
    pub szFileName: [c_char; MAX_PATH],
    pub dwFlags: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_EVENT_FRAME {
    pub _base: SIMCONNECT_RECV_EVENT,
    pub fFrameRate: f32,
    pub fSimSpeed: f32,
}

/// `dwData` is the first word of a variable-length payload.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_SIMOBJECT_DATA {
    pub _base: SIMCONNECT_RECV,
    pub dwRequestID: DWORD,
    pub dwObjectID: DWORD,
    pub dwDefineID: DWORD,
    pub dwFlags: DWORD,
    pub dwentrynumber: DWORD,
    pub dwoutof: DWORD,
    pub dwDefineCount: DWORD,
    pub dwData: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_CLIENT_DATA {
    pub _base: SIMCONNECT_RECV_SIMOBJECT_DATA,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_ASSIGNED_OBJECT_ID {
    pub _base: SIMCONNECT_RECV,
    pub dwRequestID: DWORD,
    pub dwObjectID: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_SYSTEM_STATE {
    pub _base: SIMCONNECT_RECV,
    pub dwRequestID: DWORD,
    pub dwInteger: DWORD,
    pub fFloat: f32,
    pub szString: [c_char; MAX_PATH],
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_FACILITIES_LIST {
    pub _base: SIMCONNECT_RECV,
    pub dwRequestID: DWORD,
    pub dwArraySize: DWORD,
    pub dwEntryNumber: DWORD,
    pub dwOutOf: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_DATA_FACILITY_AIRPORT {
    pub Ident: [c_char; 6],
    pub Region: [c_char; 3],
    pub Latitude: f64,
    pub Longitude: f64,
    pub Altitude: f64,
}

/// `rgData` holds `dwArraySize` entries.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_AIRPORT_LIST {
    pub _base: SIMCONNECT_RECV_FACILITIES_LIST,
    pub rgData: [SIMCONNECT_DATA_FACILITY_AIRPORT; 1],
}

/// One record of a facility data request. `Data` is the first field of the
/// record, the rest follows in definition order.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_FACILITY_DATA {
    pub _base: SIMCONNECT_RECV,
    pub UserRequestId: DWORD,
    pub UniqueRequestId: DWORD,
    pub ParentUniqueRequestId: DWORD,
    pub Type: SIMCONNECT_FACILITY_DATA_TYPE,
    pub IsListItem: DWORD,
    pub ItemIndex: DWORD,
    pub ListSize: DWORD,
    pub Data: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct SIMCONNECT_RECV_FACILITY_DATA_END {
    pub _base: SIMCONNECT_RECV,
    pub RequestId: DWORD,
}

#[repr(C, packed)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SIMCONNECT_DATA_XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SIMCONNECT_DATA_LATLONALT {
    pub Latitude: f64,
    pub Longitude: f64,
    pub Altitude: f64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SIMCONNECT_DATA_INITPOSITION {
    pub Latitude: f64,
    pub Longitude: f64,
    pub Altitude: f64,
    pub Pitch: f64,
    pub Bank: f64,
    pub Heading: f64,
    pub OnGround: DWORD,
    pub Airspeed: DWORD,
}

pub type DispatchProc =
    Option<unsafe extern "C" fn(pData: *mut SIMCONNECT_RECV, cbData: DWORD, pContext: *mut c_void)>;

imports! {
    #![link(name = "SimConnect")]

    pub fn SimConnect_Open(
        phSimConnect: *mut HANDLE,
        szName: LPCSTR,
        hWnd: HWND,
        UserEventWin32: DWORD,
        hEventHandle: HANDLE,
        ConfigIndex: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_Close(hSimConnect: HANDLE) -> HRESULT => E_FAIL;
    pub fn SimConnect_CallDispatch(
        hSimConnect: HANDLE,
        pfcnDispatch: DispatchProc,
        pContext: *mut c_void,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_AddToDataDefinition(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        DatumName: LPCSTR,
        UnitsName: LPCSTR,
        DatumType: SIMCONNECT_DATATYPE,
        fEpsilon: f32,
        DatumID: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_ClearDataDefinition(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestDataOnSimObject(
        hSimConnect: HANDLE,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        ObjectID: SIMCONNECT_OBJECT_ID,
        Period: SIMCONNECT_PERIOD,
        Flags: SIMCONNECT_DATA_REQUEST_FLAG,
        origin: DWORD,
        interval: DWORD,
        limit: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestDataOnSimObjectType(
        hSimConnect: HANDLE,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        dwRadiusMeters: DWORD,
        objType: SIMCONNECT_SIMOBJECT_TYPE,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_SetDataOnSimObject(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        ObjectID: SIMCONNECT_OBJECT_ID,
        Flags: DWORD,
        ArrayCount: DWORD,
        cbUnitSize: DWORD,
        pDataSet: *mut c_void,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_MapClientEventToSimEvent(
        hSimConnect: HANDLE,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        EventName: LPCSTR,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_AddClientEventToNotificationGroup(
        hSimConnect: HANDLE,
        GroupID: SIMCONNECT_NOTIFICATION_GROUP_ID,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        bMaskable: BOOL,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_SetNotificationGroupPriority(
        hSimConnect: HANDLE,
        GroupID: SIMCONNECT_NOTIFICATION_GROUP_ID,
        uPriority: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_TransmitClientEvent(
        hSimConnect: HANDLE,
        ObjectID: SIMCONNECT_OBJECT_ID,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        dwData: DWORD,
        GroupID: SIMCONNECT_NOTIFICATION_GROUP_ID,
        Flags: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_TransmitClientEvent_EX1(
        hSimConnect: HANDLE,
        ObjectID: SIMCONNECT_OBJECT_ID,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        GroupID: SIMCONNECT_NOTIFICATION_GROUP_ID,
        Flags: DWORD,
        dwData0: DWORD,
        dwData1: DWORD,
        dwData2: DWORD,
        dwData3: DWORD,
        dwData4: DWORD,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_SubscribeToSystemEvent(
        hSimConnect: HANDLE,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        SystemEventName: LPCSTR,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_UnsubscribeFromSystemEvent(
        hSimConnect: HANDLE,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_SetSystemEventState(
        hSimConnect: HANDLE,
        EventID: SIMCONNECT_CLIENT_EVENT_ID,
        dwState: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestSystemState(
        hSimConnect: HANDLE,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
        szState: LPCSTR,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_MapClientDataNameToID(
        hSimConnect: HANDLE,
        szClientDataName: LPCSTR,
        ClientDataID: SIMCONNECT_CLIENT_DATA_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_CreateClientData(
        hSimConnect: HANDLE,
        ClientDataID: SIMCONNECT_CLIENT_DATA_ID,
        dwSize: DWORD,
        Flags: SIMCONNECT_CREATE_CLIENT_DATA_FLAG,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_AddToClientDataDefinition(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_CLIENT_DATA_DEFINITION_ID,
        dwOffset: DWORD,
        dwSizeOrType: DWORD,
        fEpsilon: f32,
        DatumID: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_ClearClientDataDefinition(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_CLIENT_DATA_DEFINITION_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestClientData(
        hSimConnect: HANDLE,
        ClientDataID: SIMCONNECT_CLIENT_DATA_ID,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
        DefineID: SIMCONNECT_CLIENT_DATA_DEFINITION_ID,
        Period: SIMCONNECT_CLIENT_DATA_PERIOD,
        Flags: SIMCONNECT_CLIENT_DATA_REQUEST_FLAG,
        origin: DWORD,
        interval: DWORD,
        limit: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_SetClientData(
        hSimConnect: HANDLE,
        ClientDataID: SIMCONNECT_CLIENT_DATA_ID,
        DefineID: SIMCONNECT_CLIENT_DATA_DEFINITION_ID,
        Flags: DWORD,
        dwReserved: DWORD,
        cbUnitSize: DWORD,
        pDataSet: *mut c_void,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_AICreateNonATCAircraft(
        hSimConnect: HANDLE,
        szContainerTitle: LPCSTR,
        szTailNumber: LPCSTR,
        InitPos: SIMCONNECT_DATA_INITPOSITION,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_AICreateParkedATCAircraft(
        hSimConnect: HANDLE,
        szContainerTitle: LPCSTR,
        szTailNumber: LPCSTR,
        szAirportID: LPCSTR,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_AIRemoveObject(
        hSimConnect: HANDLE,
        ObjectID: SIMCONNECT_OBJECT_ID,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
    ) -> HRESULT => E_FAIL;

    pub fn SimConnect_FlightLoad(hSimConnect: HANDLE, szFileName: LPCSTR) -> HRESULT => E_FAIL;
    pub fn SimConnect_FlightSave(
        hSimConnect: HANDLE,
        szFileName: LPCSTR,
        szTitle: LPCSTR,
        szDescription: LPCSTR,
        Flags: DWORD,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_FlightPlanLoad(hSimConnect: HANDLE, szFileName: LPCSTR) -> HRESULT => E_FAIL;

    pub fn SimConnect_RequestFacilitiesList(
        hSimConnect: HANDLE,
        listType: SIMCONNECT_FACILITY_LIST_TYPE,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestFacilitiesList_EX1(
        hSimConnect: HANDLE,
        listType: SIMCONNECT_FACILITY_LIST_TYPE,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_AddToFacilityDefinition(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        FieldName: LPCSTR,
    ) -> HRESULT => E_FAIL;
    pub fn SimConnect_RequestFacilityData(
        hSimConnect: HANDLE,
        DefineID: SIMCONNECT_DATA_DEFINITION_ID,
        RequestID: SIMCONNECT_DATA_REQUEST_ID,
        ICAO: LPCSTR,
        Region: LPCSTR,
    ) -> HRESULT => E_FAIL;
}
