//! HTTP requests through the simulator's networking API.

use crate::error::{Error, Result};
use crate::sys;
use log::{debug, warn};
use std::ffi::{c_char, c_int, c_uint, c_void, CStr, CString};
use std::ptr;

type NetworkCallback = Box<dyn FnOnce(NetworkRequest, i32)>;

type RequestFn = unsafe extern "C" fn(
    *const c_char,
    *mut sys::FsNetworkHttpRequestParam,
    sys::HttpRequestCallback,
    *mut c_void,
) -> sys::FsNetworkRequestId;

/// Builds and sends an HTTP request.
pub struct NetworkRequestBuilder<'a> {
    url: CString,
    headers: Vec<CString>,
    data: Option<&'a mut [u8]>,
    callback: Option<Box<NetworkCallback>>,
}

impl<'a> NetworkRequestBuilder<'a> {
    /// Starts a request to `url`.
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            url: CString::new(url)?,
            headers: Vec::new(),
            data: None,
            callback: None,
        })
    }

    /// Set a HTTP header, e.g. `Content-Type: application/json`.
    pub fn with_header(mut self, header: &str) -> Result<Self> {
        self.headers.push(CString::new(header)?);
        Ok(self)
    }

    /// The request body.
    pub fn with_data(mut self, data: &'a mut [u8]) -> Self {
        self.data = Some(data);
        self
    }

    /// Called once the request completes. The second argument is the HTTP
    /// status, negative when the request failed.
    pub fn with_callback(mut self, callback: impl FnOnce(NetworkRequest, i32) + 'static) -> Self {
        self.callback = Some(Box::new(Box::new(callback)));
        self
    }

    /// Do HTTP GET request
    pub fn get(self) -> Result<NetworkRequest> {
        self.do_request(None, sys::fsNetworkHttpRequestGet)
    }

    /// Do HTTP POST request
    pub fn post(self, post_field: &str) -> Result<NetworkRequest> {
        let post_field = CString::new(post_field)?;
        self.do_request(Some(post_field), sys::fsNetworkHttpRequestPost)
    }

    /// Do HTTP PUT request
    pub fn put(self) -> Result<NetworkRequest> {
        self.do_request(None, sys::fsNetworkHttpRequestPut)
    }

    fn do_request(mut self, post_field: Option<CString>, request: RequestFn) -> Result<NetworkRequest> {
        // The SDK declares these fields mutable but only reads them.
        let post_field = post_field
            .as_ref()
            .map_or(ptr::null_mut(), |f| f.as_ptr() as *mut c_char);
        let mut headers = self
            .headers
            .iter()
            .map(|h| h.as_ptr() as *mut c_char)
            .collect::<Vec<_>>();
        let (data, data_size) = match self.data.as_mut() {
            Some(data) => (data.as_mut_ptr(), data.len()),
            None => (ptr::null_mut(), 0),
        };
        let mut params = sys::FsNetworkHttpRequestParam {
            postField: post_field,
            headerOptions: if headers.is_empty() {
                ptr::null_mut()
            } else {
                headers.as_mut_ptr()
            },
            headerOptionsSize: headers.len() as c_uint,
            data,
            dataSize: data_size as c_uint,
        };

        let user_data = self
            .callback
            .take()
            .map_or(ptr::null_mut(), Box::into_raw) as *mut c_void;
        let request_id = unsafe {
            request(
                self.url.as_ptr(),
                &mut params,
                Some(Self::c_wrapper),
                user_data,
            )
        };

        if request_id == 0 {
            if !user_data.is_null() {
                // The host never calls back for a rejected request.
                drop(unsafe { Box::from_raw(user_data as *mut NetworkCallback) });
            }
            warn!("network request to {:?} rejected", self.url);
            return Err(Error::Request(self.url.to_string_lossy().into_owned()));
        }
        debug!("network request {} to {:?}", request_id, self.url);
        Ok(NetworkRequest(request_id))
    }

    unsafe extern "C" fn c_wrapper(
        request_id: sys::FsNetworkRequestId,
        status_code: c_int,
        user_data: *mut c_void,
    ) {
        if !user_data.is_null() {
            let callback = Box::from_raw(user_data as *mut NetworkCallback);
            callback(NetworkRequest(request_id), status_code);
        }
    }
}

/// Lifecycle of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkRequestState {
    Invalid,
    New,
    WaitingForData,
    DataReady,
    Failed,
}

impl From<sys::FsNetworkHttpRequestState> for NetworkRequestState {
    fn from(value: sys::FsNetworkHttpRequestState) -> Self {
        match value {
            sys::FS_NETWORK_HTTP_REQUEST_STATE_NEW => Self::New,
            sys::FS_NETWORK_HTTP_REQUEST_STATE_WAITING_FOR_DATA => Self::WaitingForData,
            sys::FS_NETWORK_HTTP_REQUEST_STATE_DATA_READY => Self::DataReady,
            sys::FS_NETWORK_HTTP_REQUEST_STATE_FAILED => Self::Failed,
            _ => Self::Invalid,
        }
    }
}

/// A request in flight or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkRequest(sys::FsNetworkRequestId);

impl NetworkRequest {
    pub fn id(&self) -> sys::FsNetworkRequestId {
        self.0
    }

    /// Cancels the request.
    pub fn cancel(&self) -> bool {
        unsafe { sys::fsNetworkHttpCancelRequest(self.0) }
    }

    /// Size of the response body in bytes.
    pub fn data_size(&self) -> usize {
        unsafe { sys::fsNetworkHttpRequestGetDataSize(self.0) as usize }
    }

    /// Get the response body. The host buffer is released afterwards.
    pub fn data(&self) -> Option<Vec<u8>> {
        let data_size = self.data_size();
        if data_size == 0 {
            return None;
        }
        unsafe {
            let data = sys::fsNetworkHttpRequestGetData(self.0);
            if data.is_null() {
                return None;
            }
            let result = std::slice::from_raw_parts(data, data_size).to_vec();
            libc::free(data as *mut c_void);
            Some(result)
        }
    }

    /// HTTP status, negative when the request failed.
    pub fn error_code(&self) -> i32 {
        unsafe { sys::fsNetworkHttpRequestGetErrorCode(self.0) }
    }

    pub fn state(&self) -> NetworkRequestState {
        unsafe { sys::fsNetworkHttpRequestGetState(self.0) }.into()
    }

    /// The response header section named `section`.
    pub fn header_section(&self, section: &str) -> Option<String> {
        let section = CString::new(section).ok()?;
        unsafe {
            let value = sys::fsNetworkHttpRequestGetHeaderSection(self.0, section.as_ptr());
            if value.is_null() {
                return None;
            }
            let result = CStr::from_ptr(value).to_string_lossy().into_owned();
            libc::free(value as *mut c_void);
            Some(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn rejected_request_frees_callback() {
        let called = Rc::new(Cell::new(false));
        let flag = called.clone();
        let err = NetworkRequestBuilder::new("https://example.com/api")
            .unwrap()
            .with_header("Accept: application/json")
            .unwrap()
            .with_callback(move |_, _| flag.set(true))
            .get()
            .unwrap_err();

        assert_eq!(err.to_string(), "network request to `https://example.com/api` was rejected");
        assert_eq!(Rc::strong_count(&called), 1);
        assert!(!called.get());
    }

    #[test]
    fn post_and_put_without_host_fail() {
        let mut body = *b"{}";
        let builder = NetworkRequestBuilder::new("https://example.com").unwrap();
        assert!(matches!(builder.with_data(&mut body).put(), Err(Error::Request(_))));
        let builder = NetworkRequestBuilder::new("https://example.com").unwrap();
        assert!(matches!(builder.post("a=1"), Err(Error::Request(_))));
        let builder = NetworkRequestBuilder::new("https://example.com").unwrap();
        assert!(matches!(builder.post("a\0"), Err(Error::Nul(_))));
        assert!(NetworkRequestBuilder::new("bad\0url").is_err());
    }

    #[test]
    fn callback_runs_once_with_status() {
        let status = Rc::new(Cell::new(0));
        let seen = status.clone();
        let callback: NetworkCallback = Box::new(move |request, code| {
            assert_eq!(request.id(), 7);
            seen.set(code);
        });
        let user_data = Box::into_raw(Box::new(callback)) as *mut c_void;
        unsafe {
            NetworkRequestBuilder::c_wrapper(7, 200, user_data);
            NetworkRequestBuilder::c_wrapper(8, 500, ptr::null_mut());
        }
        assert_eq!(status.get(), 200);
        assert_eq!(Rc::strong_count(&status), 1);
    }

    #[test]
    fn request_state_decodes() {
        assert_eq!(
            NetworkRequestState::from(sys::FS_NETWORK_HTTP_REQUEST_STATE_DATA_READY),
            NetworkRequestState::DataReady
        );
        assert_eq!(NetworkRequestState::from(42), NetworkRequestState::Invalid);

        let request = NetworkRequest(1);
        assert_eq!(request.state(), NetworkRequestState::Invalid);
        assert_eq!(request.data(), None);
        assert_eq!(request.header_section("content-type"), None);
        assert!(!request.cancel());
        assert!(request.error_code() < 0);
    }
}
