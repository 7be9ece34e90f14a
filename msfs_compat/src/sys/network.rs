//! `MSFS/MSFS_Network.h`.

use std::ffi::{c_char, c_int, c_uint, c_void};

pub type FsNetworkRequestId = c_uint;

pub type FsNetworkHttpRequestState = c_uint;
pub const FS_NETWORK_HTTP_REQUEST_STATE_INVALID: FsNetworkHttpRequestState = 0;
pub const FS_NETWORK_HTTP_REQUEST_STATE_NEW: FsNetworkHttpRequestState = 1;
pub const FS_NETWORK_HTTP_REQUEST_STATE_WAITING_FOR_DATA: FsNetworkHttpRequestState = 2;
pub const FS_NETWORK_HTTP_REQUEST_STATE_DATA_READY: FsNetworkHttpRequestState = 3;
pub const FS_NETWORK_HTTP_REQUEST_STATE_FAILED: FsNetworkHttpRequestState = 4;

pub type HttpRequestCallback =
    Option<unsafe extern "C" fn(requestId: FsNetworkRequestId, errorCode: c_int, userData: *mut c_void)>;

/// The header does not declare these pointers `const`, the simulator only reads them.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FsNetworkHttpRequestParam {
    pub postField: *mut c_char,
    pub headerOptions: *mut *mut c_char,
    pub headerOptionsSize: c_uint,
    pub data: *mut u8,
    pub dataSize: c_uint,
}

imports! {
    pub fn fsNetworkHttpRequestGet(
        url: *const c_char,
        param: *mut FsNetworkHttpRequestParam,
        callback: HttpRequestCallback,
        userData: *mut c_void,
    ) -> FsNetworkRequestId => 0;
    pub fn fsNetworkHttpRequestPost(
        url: *const c_char,
        param: *mut FsNetworkHttpRequestParam,
        callback: HttpRequestCallback,
        userData: *mut c_void,
    ) -> FsNetworkRequestId => 0;
    pub fn fsNetworkHttpRequestPut(
        url: *const c_char,
        param: *mut FsNetworkHttpRequestParam,
        callback: HttpRequestCallback,
        userData: *mut c_void,
    ) -> FsNetworkRequestId => 0;
    pub fn fsNetworkHttpRequestGetDataSize(requestId: FsNetworkRequestId) -> c_uint => 0;
    pub fn fsNetworkHttpRequestGetData(requestId: FsNetworkRequestId) -> *mut u8 => std::ptr::null_mut();
    pub fn fsNetworkHttpRequestGetState(requestId: FsNetworkRequestId) -> FsNetworkHttpRequestState
        => FS_NETWORK_HTTP_REQUEST_STATE_INVALID;
    pub fn fsNetworkHttpRequestGetErrorCode(requestId: FsNetworkRequestId) -> c_int => -1;
    pub fn fsNetworkHttpRequestGetHeaderSection(
        requestId: FsNetworkRequestId,
        section: *const c_char,
    ) -> *mut c_char => std::ptr::null_mut();
    pub fn fsNetworkHttpCancelRequest(requestId: FsNetworkRequestId) -> bool => false;
}
