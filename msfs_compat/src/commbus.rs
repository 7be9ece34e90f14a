//! CommBus events shared between WASM modules and JS instruments.
use crate::sys;
use log::{debug, warn};
use std::ffi::{c_char, c_uint, c_void, CString};

type CommBusCallback<'a> = Box<dyn FnMut(&str) + 'a>;

/// Used to specify the type of module/gauge to broadcast an event to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommBusBroadcastFlags {
    JS,
    WASM,
    WASMSelfCall,
    #[default]
    Default,
    AllWASM,
    All,
}

impl From<CommBusBroadcastFlags> for sys::FsCommBusBroadcastFlags {
    fn from(value: CommBusBroadcastFlags) -> Self {
        match value {
            CommBusBroadcastFlags::JS => sys::FsCommBusBroadcast_JS,
            CommBusBroadcastFlags::WASM => sys::FsCommBusBroadcast_Wasm,
            CommBusBroadcastFlags::WASMSelfCall => sys::FsCommBusBroadcast_WasmSelfCall,
            CommBusBroadcastFlags::Default => sys::FsCommBusBroadcast_Default,
            CommBusBroadcastFlags::AllWASM => sys::FsCommBusBroadcast_AllWasm,
            CommBusBroadcastFlags::All => sys::FsCommBusBroadcast_All,
        }
    }
}

/// Keeps the events registered through it alive.
#[derive(Default)]
pub struct CommBus<'a> {
    events: Vec<CommBusEvent<'a>>,
}

impl<'a> CommBus<'a> {
    /// Registers to a communication event.
    /// Returns `true` if the registration was successful.
    pub fn register(&mut self, event_name: &str, callback: impl FnMut(&str) + 'a) -> bool {
        match CommBusEvent::register(event_name, callback) {
            Some(event) => {
                self.events.push(event);
                true
            }
            None => false,
        }
    }

    /// Unregisters every callback registered for `event_name` through this instance.
    pub fn unregister(&mut self, event_name: &str) {
        self.events
            .retain(|event| event.event_name.as_bytes() != event_name.as_bytes());
    }

    /// Calls a communication event.
    /// Returns `true` if the call was successful.
    pub fn call(event_name: &str, args: &str, called: CommBusBroadcastFlags) -> bool {
        let (Ok(event_name), Ok(args_cstr)) = (CString::new(event_name), CString::new(args)) else {
            warn!("CommBus call with interior NUL dropped");
            return false;
        };
        unsafe {
            sys::fsCommBusCall(
                event_name.as_ptr(),
                args_cstr.as_ptr(),
                // Includes the terminating NUL.
                (args.len() + 1) as c_uint,
                called.into(),
            )
        }
    }

    /// Unregisters all communication events registered with this `CommBus` instance.
    pub fn unregister_all(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// CommBus handle. When this handle goes out of scope the callback will be unregistered.
pub struct CommBusEvent<'a> {
    event_name: CString,
    // Called through the context pointer handed to the host. Double boxed so
    // that pointer is thin.
    _callback: Box<CommBusCallback<'a>>,
}

impl<'a> CommBusEvent<'a> {
    /// Registers to a communication event.
    pub fn register(event_name: &str, callback: impl FnMut(&str) + 'a) -> Option<Self> {
        let event_name = CString::new(event_name).ok()?;
        let mut callback: Box<CommBusCallback<'a>> = Box::new(Box::new(callback));
        let ctx = &mut *callback as *mut CommBusCallback<'a> as *mut c_void;
        let registered =
            unsafe { sys::fsCommBusRegister(event_name.as_ptr(), Some(Self::c_callback), ctx) };
        if registered {
            debug!("registered CommBus event {:?}", event_name);
            Some(Self {
                event_name,
                _callback: callback,
            })
        } else {
            None
        }
    }

    pub fn event_name(&self) -> &str {
        self.event_name.to_str().unwrap_or_default()
    }

    unsafe extern "C" fn c_callback(args: *const c_char, size: c_uint, ctx: *mut c_void) {
        if ctx.is_null() {
            return;
        }
        let callback = &mut *(ctx as *mut CommBusCallback<'a>);
        let args = if args.is_null() {
            &[][..]
        } else {
            std::slice::from_raw_parts(args as *const u8, size as usize)
        };
        // Senders include the NUL terminator in `size`.
        let args = args.strip_suffix(&[0]).unwrap_or(args);
        callback(&String::from_utf8_lossy(args));
    }
}

impl Drop for CommBusEvent<'_> {
    fn drop(&mut self) {
        unsafe {
            sys::fsCommBusUnregister(self.event_name.as_ptr(), Some(Self::c_callback));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn broadcast_flags_map_to_sdk_values() {
        assert_eq!(
            sys::FsCommBusBroadcastFlags::from(CommBusBroadcastFlags::default()),
            sys::FsCommBusBroadcast_JS | sys::FsCommBusBroadcast_Wasm
        );
        assert_eq!(
            sys::FsCommBusBroadcastFlags::from(CommBusBroadcastFlags::AllWASM),
            sys::FsCommBusBroadcast_Wasm | sys::FsCommBusBroadcast_WasmSelfCall
        );
        assert_eq!(sys::FsCommBusBroadcastFlags::from(CommBusBroadcastFlags::All), 0b111);
    }

    #[test]
    fn registration_without_host_fails() {
        let mut bus = CommBus::default();
        assert!(!bus.register("EVENT", |_| {}));
        assert!(!bus.register("BAD\0NAME", |_| {}));
        assert!(bus.is_empty());
        assert!(!CommBus::call("EVENT", "args", CommBusBroadcastFlags::Default));
        assert!(!CommBus::call("EVENT", "a\0b", CommBusBroadcastFlags::JS));
    }

    #[test]
    fn callback_receives_args_without_nul() {
        let received = RefCell::new(Vec::new());
        let mut callback: CommBusCallback = Box::new(|args: &str| {
            received.borrow_mut().push(args.to_owned());
        });
        let ctx = &mut callback as *mut CommBusCallback as *mut c_void;
        let args = b"{\"value\":1}\0";
        unsafe {
            CommBusEvent::c_callback(args.as_ptr() as *const c_char, args.len() as c_uint, ctx);
            CommBusEvent::c_callback(std::ptr::null(), 0, ctx);
            CommBusEvent::c_callback(args.as_ptr() as *const c_char, 3, std::ptr::null_mut());
        }
        drop(callback);
        assert_eq!(received.into_inner(), vec!["{\"value\":1}".to_owned(), String::new()]);
    }
}
