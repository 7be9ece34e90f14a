//! A SimConnect client built on the WASM SimConnect imports.

#![allow(clippy::too_many_arguments)]

use crate::error::Result;
use crate::sys;
use log::{debug, warn};

use std::{
    any::TypeId,
    collections::HashMap,
    ffi::{CStr, CString},
    marker::PhantomData,
    mem::size_of,
    ops::Deref,
    pin::Pin,
};

pub use sys::SIMCONNECT_OBJECT_ID_USER;

#[cfg(feature = "derive")]
pub use msfs_compat_derive::sim_connect_client_data_definition as client_data_definition;
#[cfg(feature = "derive")]
pub use msfs_compat_derive::sim_connect_data_definition as data_definition;

pub type DataXYZ = sys::SIMCONNECT_DATA_XYZ;
pub type DataLatLonAlt = sys::SIMCONNECT_DATA_LATLONALT;
pub type InitPosition = sys::SIMCONNECT_DATA_INITPOSITION;

/// A trait implemented by the `data_definition` attribute.
pub trait DataDefinition: 'static {
    #[doc(hidden)]
    const DEFINITIONS: &'static [(&'static str, &'static str, f32, sys::SIMCONNECT_DATATYPE)];
}

/// A trait implemented by the `client_data_definition` attribute.
pub trait ClientDataDefinition: 'static {
    /// `(offset, size, epsilon)` of every field.
    #[doc(hidden)]
    fn get_definitions() -> Vec<(usize, usize, f32)>;
}

/// A facility layout for `request_facility_data`.
///
/// `FIELDS` is handed to `SimConnect_AddToFacilityDefinition` one entry at a
/// time and must open and close its records, e.g.
/// `["OPEN AIRPORT", "LATITUDE", "LONGITUDE", "CLOSE AIRPORT"]`. The
/// implementing type is `repr(C, packed)` and holds the fields of the
/// outermost record in order.
pub trait FacilityDefinition: 'static {
    const FIELDS: &'static [&'static str];
}

/// Rusty HRESULT wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("SimConnect call failed with HRESULT 0x{0:08X}")]
pub struct HResult(pub sys::HRESULT);

#[inline(always)]
pub fn map_err(result: sys::HRESULT) -> Result<()> {
    if result >= 0 {
        Ok(())
    } else {
        Err(HResult(result).into())
    }
}

type SimConnectCallback<'a> = dyn FnMut(&mut SimConnect, SimConnectRecv) + 'a;

/// An open SimConnect session.
pub struct SimConnect<'a> {
    handle: sys::HANDLE,
    callback: Option<Box<SimConnectCallback<'a>>>,
    on_close: Option<Box<dyn FnOnce() + 'a>>,
    data_definitions: HashMap<TypeId, sys::SIMCONNECT_DATA_DEFINITION_ID>,
    client_data_definitions: HashMap<TypeId, sys::SIMCONNECT_CLIENT_DATA_DEFINITION_ID>,
    facility_definitions: HashMap<TypeId, sys::SIMCONNECT_DATA_DEFINITION_ID>,
    facility_requests: HashMap<sys::SIMCONNECT_DATA_REQUEST_ID, TypeId>,
    event_id_counter: sys::DWORD,
    client_data_id_counter: sys::DWORD,
}

impl std::fmt::Debug for SimConnect<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("SimConnect")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl<'a> SimConnect<'a> {
    /// Opens a session named `name`. `callback` receives every message the
    /// session dispatches.
    pub fn open<F>(name: &str, callback: F) -> Result<Pin<Box<SimConnect<'a>>>>
    where
        F: FnMut(&mut SimConnect, SimConnectRecv) + 'a,
    {
        let name = CString::new(name)?;
        let mut handle = 0;
        unsafe {
            map_err(sys::SimConnect_Open(
                &mut handle,
                name.as_ptr(),
                std::ptr::null_mut(),
                0,
                0,
                0,
            ))?;
        }
        debug!("opened SimConnect session {:?} ({})", name, handle);
        let mut sim = Box::pin(SimConnect::with_handle(handle, callback));
        sim.call_dispatch()?;
        Ok(sim)
    }

    pub(crate) fn with_handle<F>(handle: sys::HANDLE, callback: F) -> Self
    where
        F: FnMut(&mut SimConnect, SimConnectRecv) + 'a,
    {
        SimConnect {
            handle,
            callback: Some(Box::new(callback)),
            on_close: None,
            data_definitions: HashMap::new(),
            client_data_definitions: HashMap::new(),
            facility_definitions: HashMap::new(),
            facility_requests: HashMap::new(),
            event_id_counter: 0,
            client_data_id_counter: 0,
        }
    }

    pub fn handle(&self) -> sys::HANDLE {
        self.handle
    }

    /// Runs `f` once the session has been closed.
    pub(crate) fn set_on_close(self: Pin<&mut Self>, f: impl FnOnce() + 'a) {
        // `on_close` is not structurally pinned.
        unsafe { self.get_unchecked_mut() }.on_close = Some(Box::new(f));
    }

    /// Dispatches pending messages to the callback. Gauges get this for free
    /// through the gauge executor.
    pub fn call_dispatch(&mut self) -> Result<()> {
        unsafe { Self::dispatch_raw(self) }
    }

    /// # Safety
    /// `sim` must point to a live, pinned session.
    pub(crate) unsafe fn dispatch_raw(sim: *mut SimConnect<'a>) -> Result<()> {
        map_err(sys::SimConnect_CallDispatch(
            (*sim).handle,
            Some(dispatch_cb),
            sim as *mut std::ffi::c_void,
        ))
    }

    pub(crate) fn dispatch(&mut self, bytes: &[u8]) {
        let Some(recv) = SimConnectRecv::parse(bytes) else {
            debug!("ignoring SimConnect message of {} bytes", bytes.len());
            return;
        };
        // The callback is taken out so it can receive `self` mutably.
        if let Some(mut callback) = self.callback.take() {
            callback(self, recv);
            self.callback = Some(callback);
        }
    }

    /// Data and facility definitions share one id space.
    fn next_define_id(&self) -> usize {
        self.data_definitions.len() + self.facility_definitions.len()
    }

    fn get_define_id<T: DataDefinition>(&mut self) -> Result<sys::SIMCONNECT_DATA_DEFINITION_ID> {
        let handle = self.handle;
        let next_id = self.next_define_id();
        SimConnect::get_id::<T, _, _>(&mut self.data_definitions, next_id, |define_id| {
            for (datum_name, units_type, epsilon, datatype) in T::DEFINITIONS {
                let datum_name = CString::new(*datum_name)?;
                let units_type = CString::new(*units_type)?;
                unsafe {
                    map_err(sys::SimConnect_AddToDataDefinition(
                        handle,
                        define_id,
                        datum_name.as_ptr(),
                        units_type.as_ptr(),
                        *datatype,
                        *epsilon,
                        sys::SIMCONNECT_UNUSED,
                    ))?;
                }
            }
            Ok(())
        })
    }

    fn get_client_data_define_id<T: ClientDataDefinition>(
        &mut self,
    ) -> Result<sys::SIMCONNECT_CLIENT_DATA_DEFINITION_ID> {
        let handle = self.handle;
        let next_id = self.client_data_definitions.len();
        SimConnect::get_id::<T, _, _>(&mut self.client_data_definitions, next_id, |define_id| {
            let definitions = T::get_definitions();
            for (offset, size, epsilon) in &definitions {
                unsafe {
                    map_err(sys::SimConnect_AddToClientDataDefinition(
                        handle,
                        define_id,
                        *offset as sys::DWORD,
                        *size as sys::DWORD,
                        *epsilon,
                        sys::SIMCONNECT_UNUSED,
                    ))?;
                }
            }
            if let Some((offset, padding)) = tail_padding(size_of::<T>(), &definitions) {
                unsafe {
                    map_err(sys::SimConnect_AddToClientDataDefinition(
                        handle,
                        define_id,
                        offset as sys::DWORD,
                        padding as sys::DWORD,
                        0.0,
                        sys::SIMCONNECT_UNUSED,
                    ))?;
                }
            }
            Ok(())
        })
    }

    fn get_facility_define_id<T: FacilityDefinition>(
        &mut self,
    ) -> Result<sys::SIMCONNECT_DATA_DEFINITION_ID> {
        let handle = self.handle;
        let next_id = self.next_define_id();
        SimConnect::get_id::<T, _, _>(&mut self.facility_definitions, next_id, |define_id| {
            for field in T::FIELDS {
                let field = CString::new(*field)?;
                unsafe {
                    map_err(sys::SimConnect_AddToFacilityDefinition(
                        handle,
                        define_id,
                        field.as_ptr(),
                    ))?;
                }
            }
            Ok(())
        })
    }

    fn get_id<T: 'static, U: TryFrom<usize> + Copy, F: FnOnce(U) -> Result<()>>(
        map: &mut HashMap<TypeId, U>,
        next_id: usize,
        insert_fn: F,
    ) -> Result<U> {
        let key = TypeId::of::<T>();
        let maybe_id = U::try_from(next_id).unwrap_or_else(|_| unreachable!());
        match map.entry(key) {
            std::collections::hash_map::Entry::Vacant(entry) => {
                insert_fn(maybe_id)?;
                entry.insert(maybe_id);
                Ok(maybe_id)
            }
            std::collections::hash_map::Entry::Occupied(entry) => Ok(*entry.get()),
        }
    }

    fn next_event_id(&mut self) -> sys::SIMCONNECT_CLIENT_EVENT_ID {
        let event_id = self.event_id_counter;
        self.event_id_counter += 1;
        event_id
    }

    /// Writes `data` into the simulation object `object_id`.
    pub fn set_data_on_sim_object<T: DataDefinition>(
        &mut self,
        object_id: sys::SIMCONNECT_OBJECT_ID,
        data: &T,
    ) -> Result<()> {
        let define_id = self.get_define_id::<T>()?;
        unsafe {
            map_err(sys::SimConnect_SetDataOnSimObject(
                self.handle,
                define_id,
                object_id,
                0,
                0,
                std::mem::size_of_val(data) as sys::DWORD,
                data as *const T as *mut std::ffi::c_void,
            ))
        }
    }

    /// Requests `T` for every object of `type` within `radius` meters
    /// of the user aircraft.
    pub fn request_data_on_sim_object_type<T: DataDefinition>(
        &mut self,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
        radius: sys::DWORD,
        r#type: sys::SIMCONNECT_SIMOBJECT_TYPE,
    ) -> Result<()> {
        let define_id = self.get_define_id::<T>()?;
        unsafe {
            map_err(sys::SimConnect_RequestDataOnSimObjectType(
                self.handle,
                request_id,
                define_id,
                radius,
                r#type,
            ))
        }
    }

    /// Subscribes to `T` for `object_id`, delivered every `period`.
    pub fn request_data_on_sim_object<T: DataDefinition>(
        &mut self,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
        object_id: sys::SIMCONNECT_OBJECT_ID,
        period: Period,
    ) -> Result<()> {
        let define_id = self.get_define_id::<T>()?;

        unsafe {
            map_err(sys::SimConnect_RequestDataOnSimObject(
                self.handle,
                request_id,
                define_id,
                object_id,
                period as sys::SIMCONNECT_PERIOD,
                sys::SIMCONNECT_DATA_REQUEST_FLAG_CHANGED,
                0,
                0,
                0,
            ))
        }
    }

    /// Maps the sim event `event_name` to a fresh client event id. A masked
    /// event is hidden from the simulator and seen only by this session.
    pub fn map_client_event_to_sim_event(
        &mut self,
        event_name: &str,
        mask: bool,
    ) -> Result<sys::SIMCONNECT_CLIENT_EVENT_ID> {
        let event_name = CString::new(event_name)?;
        let event_id = self.next_event_id();

        unsafe {
            map_err(sys::SimConnect_MapClientEventToSimEvent(
                self.handle,
                event_id,
                event_name.as_ptr(),
            ))?;

            map_err(sys::SimConnect_AddClientEventToNotificationGroup(
                self.handle,
                0,
                event_id,
                sys::to_bool(mask),
            ))?;

            map_err(sys::SimConnect_SetNotificationGroupPriority(
                self.handle,
                0,
                sys::SIMCONNECT_GROUP_PRIORITY_HIGHEST_MASKABLE,
            ))?;
        }
        Ok(event_id)
    }

    /// Fires an event mapped by `map_client_event_to_sim_event`.
    pub fn transmit_client_event(
        &mut self,
        object_id: sys::SIMCONNECT_OBJECT_ID,
        event_id: sys::SIMCONNECT_CLIENT_EVENT_ID,
        data: sys::DWORD,
    ) -> Result<()> {
        unsafe {
            map_err(sys::SimConnect_TransmitClientEvent(
                self.handle,
                object_id,
                event_id,
                data,
                0,
                0,
            ))
        }
    }

    pub fn transmit_client_event_ex1(
        &mut self,
        object_id: sys::SIMCONNECT_OBJECT_ID,
        event_id: sys::SIMCONNECT_CLIENT_EVENT_ID,
        data: [sys::DWORD; 5],
    ) -> Result<()> {
        let [d0, d1, d2, d3, d4] = data;
        unsafe {
            map_err(sys::SimConnect_TransmitClientEvent_EX1(
                self.handle,
                object_id,
                event_id,
                0,
                0,
                d0,
                d1,
                d2,
                d3,
                d4,
            ))
        }
    }

    fn get_client_data_id(&mut self, name: &str) -> Result<sys::SIMCONNECT_CLIENT_DATA_ID> {
        let name = CString::new(name)?;
        let client_id = self.client_data_id_counter;
        self.client_data_id_counter += 1;

        unsafe {
            map_err(sys::SimConnect_MapClientDataNameToID(
                self.handle,
                name.as_ptr(),
                client_id,
            ))?;
        }
        Ok(client_id)
    }

    /// Creates the client data region `name`, sized for `T`. Other sessions
    /// read it through `request_client_data`. Regions are never freed.
    pub fn create_client_data<T: ClientDataDefinition>(
        &mut self,
        name: &str,
    ) -> Result<ClientDataArea<T>> {
        let client_id = self.get_client_data_id(name)?;
        unsafe {
            map_err(sys::SimConnect_CreateClientData(
                self.handle,
                client_id,
                size_of::<T>() as sys::DWORD,
                sys::SIMCONNECT_CREATE_CLIENT_DATA_FLAG_DEFAULT,
            ))?;
        }
        Ok(ClientDataArea {
            client_id,
            phantom: PhantomData,
        })
    }

    /// A handle to the region `name` created by another module.
    pub fn get_client_area<T: ClientDataDefinition>(
        &mut self,
        name: &str,
    ) -> Result<ClientDataArea<T>> {
        let client_id = self.get_client_data_id(name)?;
        Ok(ClientDataArea {
            client_id,
            phantom: PhantomData,
        })
    }

    /// Subscribes to the region `name`. Some module must have created it with
    /// `create_client_data`.
    pub fn request_client_data<T: ClientDataDefinition>(
        &mut self,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
        name: &str,
    ) -> Result<()> {
        let define_id = self.get_client_data_define_id::<T>()?;
        let client_id = self.get_client_data_id(name)?;
        unsafe {
            map_err(sys::SimConnect_RequestClientData(
                self.handle,
                client_id,
                request_id,
                define_id,
                sys::SIMCONNECT_CLIENT_DATA_PERIOD_ON_SET,
                sys::SIMCONNECT_CLIENT_DATA_REQUEST_FLAG_CHANGED,
                0,
                0,
                0,
            ))
        }
    }

    /// Writes `data` into a region.
    pub fn set_client_data<T: ClientDataDefinition>(
        &mut self,
        area: &ClientDataArea<T>,
        data: &T,
    ) -> Result<()> {
        let define_id = self.get_client_data_define_id::<T>()?;
        unsafe {
            map_err(sys::SimConnect_SetClientData(
                self.handle,
                area.client_id,
                define_id,
                0,
                0,
                size_of::<T>() as sys::DWORD,
                data as *const T as *mut std::ffi::c_void,
            ))
        }
    }

    pub fn ai_create_non_atc_aircraft(
        &mut self,
        container_title: &str,
        tail_number: &str,
        init_position: InitPosition,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
    ) -> Result<()> {
        let container_title = CString::new(container_title)?;
        let tail_number = CString::new(tail_number)?;

        unsafe {
            map_err(sys::SimConnect_AICreateNonATCAircraft(
                self.handle,
                container_title.as_ptr(),
                tail_number.as_ptr(),
                init_position,
                request_id,
            ))
        }
    }

    pub fn ai_create_parked_atc_aircraft(
        &mut self,
        container_title: &str,
        tail_number: &str,
        icao: &str,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
    ) -> Result<()> {
        let container_title = CString::new(container_title)?;
        let tail_number = CString::new(tail_number)?;
        let icao = CString::new(icao)?;

        unsafe {
            map_err(sys::SimConnect_AICreateParkedATCAircraft(
                self.handle,
                container_title.as_ptr(),
                tail_number.as_ptr(),
                icao.as_ptr(),
                request_id,
            ))
        }
    }

    pub fn ai_remove_object(
        &mut self,
        object_id: sys::SIMCONNECT_OBJECT_ID,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
    ) -> Result<()> {
        unsafe {
            map_err(sys::SimConnect_AIRemoveObject(
                self.handle,
                object_id,
                request_id,
            ))
        }
    }

    pub fn subscribe_to_system_event(
        &mut self,
        system_event_name: &str,
    ) -> Result<sys::SIMCONNECT_CLIENT_EVENT_ID> {
        let system_event_name = CString::new(system_event_name)?;
        let event_id = self.next_event_id();

        unsafe {
            map_err(sys::SimConnect_SubscribeToSystemEvent(
                self.handle,
                event_id,
                system_event_name.as_ptr(),
            ))?;
        }
        Ok(event_id)
    }

    pub fn unsubscribe_from_system_event(
        &mut self,
        event_id: sys::SIMCONNECT_CLIENT_EVENT_ID,
    ) -> Result<()> {
        unsafe {
            map_err(sys::SimConnect_UnsubscribeFromSystemEvent(
                self.handle,
                event_id,
            ))
        }
    }

    pub fn set_system_event_state(
        &mut self,
        event_id: sys::SIMCONNECT_CLIENT_EVENT_ID,
        on: bool,
    ) -> Result<()> {
        let state = if on {
            sys::SIMCONNECT_STATE_ON
        } else {
            sys::SIMCONNECT_STATE_OFF
        };
        unsafe {
            map_err(sys::SimConnect_SetSystemEventState(
                self.handle,
                event_id,
                state,
            ))
        }
    }

    /// Request a system state such as `"AircraftLoaded"` or `"Sim"`. The
    /// answer arrives as [`SimConnectRecv::SystemState`].
    pub fn request_system_state(
        &mut self,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
        state: &str,
    ) -> Result<()> {
        let state = CString::new(state)?;
        unsafe {
            map_err(sys::SimConnect_RequestSystemState(
                self.handle,
                request_id,
                state.as_ptr(),
            ))
        }
    }

    /// Load a .FLT file from disk
    pub fn load_flight(&mut self, flight_file_path: &str) -> Result<()> {
        let flight_file_path = CString::new(flight_file_path)?;

        unsafe {
            map_err(sys::SimConnect_FlightLoad(
                self.handle,
                flight_file_path.as_ptr(),
            ))
        }
    }

    /// Save the current sim state to a .FLT file
    pub fn save_flight(
        &mut self,
        flight_file_path: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let flight_file_path = CString::new(flight_file_path)?;
        let title = title.map(CString::new).transpose()?;
        let description = description.map(CString::new).transpose()?;

        unsafe {
            map_err(sys::SimConnect_FlightSave(
                self.handle,
                flight_file_path.as_ptr(),
                title.as_ref().map_or(std::ptr::null(), |x| x.as_ptr()),
                description.as_ref().map_or(std::ptr::null(), |x| x.as_ptr()),
                0,
            ))
        }
    }

    /// Load a .PLN file from disk
    pub fn load_flight_plan(&mut self, flight_plan_file_path: &str) -> Result<()> {
        let flight_plan_file_path = CString::new(flight_plan_file_path)?;

        unsafe {
            map_err(sys::SimConnect_FlightPlanLoad(
                self.handle,
                flight_plan_file_path.as_ptr(),
            ))
        }
    }

    /// Requests every cached facility of `facility_list_type`. The answer
    /// arrives as [`SimConnectRecv::AirportList`] and its siblings.
    pub fn request_facilities_list(
        &mut self,
        facility_list_type: sys::SIMCONNECT_FACILITY_LIST_TYPE,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
    ) -> Result<()> {
        unsafe {
            map_err(sys::SimConnect_RequestFacilitiesList(
                self.handle,
                facility_list_type,
                request_id,
            ))
        }
    }

    /// Like `request_facilities_list`, limited to the reality bubble.
    pub fn request_facilities_list_ex1(
        &mut self,
        facility_list_type: sys::SIMCONNECT_FACILITY_LIST_TYPE,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
    ) -> Result<()> {
        unsafe {
            map_err(sys::SimConnect_RequestFacilitiesList_EX1(
                self.handle,
                facility_list_type,
                request_id,
            ))
        }
    }

    /// Requests the facility `icao`, laid out as `T`. Records arrive as
    /// [`SimConnectRecv::FacilityData`], followed by
    /// [`SimConnectRecv::FacilityDataEnd`].
    pub fn request_facility_data<T: FacilityDefinition>(
        &mut self,
        request_id: sys::SIMCONNECT_DATA_REQUEST_ID,
        icao: &str,
        region: Option<&str>,
    ) -> Result<()> {
        let define_id = self.get_facility_define_id::<T>()?;
        let icao = CString::new(icao)?;
        let region = region.map(CString::new).transpose()?;

        unsafe {
            map_err(sys::SimConnect_RequestFacilityData(
                self.handle,
                define_id,
                request_id,
                icao.as_ptr(),
                region.as_ref().map_or(c"".as_ptr(), |x| x.as_ptr()),
            ))?;
        }
        self.facility_requests.insert(request_id, TypeId::of::<T>());
        Ok(())
    }
}

impl Drop for SimConnect<'_> {
    fn drop(&mut self) {
        if let Err(e) = unsafe { map_err(sys::SimConnect_Close(self.handle)) } {
            warn!("failed to close SimConnect session {}: {}", self.handle, e);
        }
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }
}

/// The gap between the end of the last field and the end of a client data
/// struct, as `(offset, size)`.
fn tail_padding(size: usize, definitions: &[(usize, usize, f32)]) -> Option<(usize, usize)> {
    // Fields may be reordered, so the gap is measured from the field that ends last.
    let end = definitions
        .iter()
        .map(|(offset, size, _)| offset + size)
        .max()?;
    (end < size).then_some((end, size - end))
}

unsafe extern "C" fn dispatch_cb(
    recv: *mut sys::SIMCONNECT_RECV,
    cb_data: sys::DWORD,
    p_context: *mut std::ffi::c_void,
) {
    if recv.is_null() || p_context.is_null() {
        return;
    }
    let len = if cb_data > 0 {
        cb_data
    } else {
        (*recv).dwSize
    };
    let bytes = std::slice::from_raw_parts(recv as *const u8, len as usize);
    let sim = &mut *(p_context as *mut SimConnect);
    sim.dispatch(bytes);
}

/// A received SimConnect struct, borrowed from the dispatch buffer.
///
/// Dereferences to the packed struct. The buffer may extend past the struct
/// for messages with a variable length payload.
pub struct Recv<'a, T> {
    bytes: &'a [u8],
    phantom: PhantomData<&'a T>,
}

impl<'a, T> Recv<'a, T> {
    fn new(bytes: &'a [u8]) -> Option<Self> {
        debug_assert_eq!(std::mem::align_of::<T>(), 1);
        (bytes.len() >= size_of::<T>()).then_some(Recv {
            bytes,
            phantom: PhantomData,
        })
    }

    /// The complete message, including any trailing payload.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<T> Clone for Recv<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Recv<'_, T> {}

impl<T> Deref for Recv<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SimConnect structs are packed, the length was checked in `new`.
        unsafe { &*(self.bytes.as_ptr() as *const T) }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Recv<'_, T> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(&**self, fmt)
    }
}

macro_rules! recv {
    ($V:ident) => {
        $V! {
            (SIMCONNECT_RECV_ID_EXCEPTION, SIMCONNECT_RECV_EXCEPTION, Exception),
            (SIMCONNECT_RECV_ID_OPEN, SIMCONNECT_RECV_OPEN, Open),
            (SIMCONNECT_RECV_ID_QUIT, SIMCONNECT_RECV_QUIT, Quit),
            (SIMCONNECT_RECV_ID_EVENT, SIMCONNECT_RECV_EVENT, Event),
            (SIMCONNECT_RECV_ID_EVENT_EX1, SIMCONNECT_RECV_EVENT_EX1, EventEx1),
            (SIMCONNECT_RECV_ID_EVENT_FILENAME, SIMCONNECT_RECV_EVENT_FILENAME, EventFilename),
            (SIMCONNECT_RECV_ID_EVENT_FRAME, SIMCONNECT_RECV_EVENT_FRAME, EventFrame),
            (SIMCONNECT_RECV_ID_SIMOBJECT_DATA, SIMCONNECT_RECV_SIMOBJECT_DATA, SimObjectData),
            (SIMCONNECT_RECV_ID_CLIENT_DATA, SIMCONNECT_RECV_CLIENT_DATA, ClientData),
            (SIMCONNECT_RECV_ID_ASSIGNED_OBJECT_ID, SIMCONNECT_RECV_ASSIGNED_OBJECT_ID, AssignedObjectId),
            (SIMCONNECT_RECV_ID_SYSTEM_STATE, SIMCONNECT_RECV_SYSTEM_STATE, SystemState),
            (SIMCONNECT_RECV_ID_AIRPORT_LIST, SIMCONNECT_RECV_AIRPORT_LIST, AirportList),
            (SIMCONNECT_RECV_ID_FACILITY_DATA, SIMCONNECT_RECV_FACILITY_DATA, FacilityData),
            (SIMCONNECT_RECV_ID_FACILITY_DATA_END, SIMCONNECT_RECV_FACILITY_DATA_END, FacilityDataEnd),
        }
    };
}

macro_rules! recv_enum {
    ($( ($ID:ident, $T:ident, $E:ident), )*) => {
        /// Message received from SimConnect.
        #[derive(Debug, Clone, Copy)]
        pub enum SimConnectRecv<'a> {
            Null,
            $(
                $E(Recv<'a, sys::$T>),
            )*
        }

        impl<'a> SimConnectRecv<'a> {
            /// Decodes a dispatch buffer. Returns `None` for unsupported or
            /// truncated messages.
            pub fn parse(bytes: &'a [u8]) -> Option<Self> {
                let id = Recv::<sys::SIMCONNECT_RECV>::new(bytes)?.dwID;
                match id {
                    sys::SIMCONNECT_RECV_ID_NULL => Some(SimConnectRecv::Null),
                    $(
                        sys::$ID => Recv::new(bytes).map(SimConnectRecv::$E),
                    )*
                    sys::SIMCONNECT_RECV_ID_SIMOBJECT_DATA_BYTYPE => {
                        Recv::new(bytes).map(SimConnectRecv::SimObjectData)
                    }
                    _ => None,
                }
            }

            /// The raw message. Empty for [`SimConnectRecv::Null`].
            pub fn bytes(&self) -> &'a [u8] {
                match self {
                    SimConnectRecv::Null => &[],
                    $(
                        SimConnectRecv::$E(recv) => recv.bytes(),
                    )*
                }
            }
        }
    }
}
recv!(recv_enum);

/// An owned copy of a received message.
#[derive(Clone, PartialEq, Eq)]
pub struct RecvBuffer(Box<[u8]>);

impl RecvBuffer {
    pub fn recv(&self) -> Option<SimConnectRecv<'_>> {
        SimConnectRecv::parse(&self.0)
    }
}

impl From<&SimConnectRecv<'_>> for RecvBuffer {
    fn from(recv: &SimConnectRecv<'_>) -> Self {
        RecvBuffer(recv.bytes().into())
    }
}

impl std::fmt::Debug for RecvBuffer {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_tuple("RecvBuffer").field(&self.recv()).finish()
    }
}

impl sys::SIMCONNECT_RECV_EXCEPTION {
    pub fn exception(&self) -> sys::SIMCONNECT_EXCEPTION {
        self.dwException
    }

    /// The send id of the call that failed.
    pub fn send_id(&self) -> sys::DWORD {
        self.dwSendID
    }

    pub fn name(&self) -> &'static str {
        exception_name(self.dwException)
    }
}

impl sys::SIMCONNECT_RECV_OPEN {
    pub fn application_name(&self) -> String {
        let name = self.szApplicationName;
        let bytes: Vec<u8> = name.iter().map(|c| *c as u8).collect();
        match CStr::from_bytes_until_nul(&bytes) {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub fn application_version(&self) -> (sys::DWORD, sys::DWORD) {
        (self.dwApplicationVersionMajor, self.dwApplicationVersionMinor)
    }
}

impl sys::SIMCONNECT_RECV_EVENT {
    /// The ID for this event.
    pub fn id(&self) -> sys::DWORD {
        self.uEventID
    }

    /// The data for this event.
    pub fn data(&self) -> sys::DWORD {
        self.dwData
    }
}

impl sys::SIMCONNECT_RECV_EVENT_EX1 {
    /// The ID for this event.
    pub fn id(&self) -> sys::DWORD {
        self.uEventID
    }

    /// The data for this event.
    pub fn data(&self) -> [sys::DWORD; 5] {
        [
            self.dwData0,
            self.dwData1,
            self.dwData2,
            self.dwData3,
            self.dwData4,
        ]
    }
}

impl sys::SIMCONNECT_RECV_EVENT_FRAME {
    pub fn frame_rate(&self) -> f32 {
        self.fFrameRate
    }

    pub fn sim_speed(&self) -> f32 {
        self.fSimSpeed
    }
}

impl sys::SIMCONNECT_RECV_ASSIGNED_OBJECT_ID {
    pub fn id(&self) -> sys::DWORD {
        self.dwRequestID
    }

    pub fn object_id(&self) -> sys::DWORD {
        self.dwObjectID
    }
}

impl sys::SIMCONNECT_RECV_SYSTEM_STATE {
    pub fn id(&self) -> sys::DWORD {
        self.dwRequestID
    }

    pub fn integer(&self) -> sys::DWORD {
        self.dwInteger
    }

    pub fn float(&self) -> f32 {
        self.fFloat
    }
}

const SIMOBJECT_DATA_OFFSET: usize = std::mem::offset_of!(sys::SIMCONNECT_RECV_SIMOBJECT_DATA, dwData);
const CLIENT_DATA_OFFSET: usize =
    std::mem::offset_of!(sys::SIMCONNECT_RECV_CLIENT_DATA, _base) + SIMOBJECT_DATA_OFFSET;
const FACILITY_DATA_OFFSET: usize = std::mem::offset_of!(sys::SIMCONNECT_RECV_FACILITY_DATA, Data);

fn read_payload<T>(bytes: &[u8], offset: usize) -> Option<T> {
    let payload = bytes.get(offset..)?;
    if payload.len() < size_of::<T>() {
        return None;
    }
    Some(unsafe { std::ptr::read_unaligned(payload.as_ptr() as *const T) })
}

impl Recv<'_, sys::SIMCONNECT_RECV_SIMOBJECT_DATA> {
    /// The ID for this data.
    pub fn id(&self) -> sys::DWORD {
        self.dwRequestID
    }

    /// Copy the data out of a SimObjectData message. Returns `None` when the
    /// message was produced by a different definition.
    pub fn into<T: DataDefinition>(self, sim: &SimConnect) -> Option<T> {
        let define_id = *sim.data_definitions.get(&TypeId::of::<T>())?;
        if define_id != { self.dwDefineID } {
            return None;
        }
        read_payload(self.bytes, SIMOBJECT_DATA_OFFSET)
    }
}

impl Recv<'_, sys::SIMCONNECT_RECV_CLIENT_DATA> {
    /// The ID for this data.
    pub fn id(&self) -> sys::DWORD {
        self._base.dwRequestID
    }

    /// Copy the data out of a ClientData message.
    pub fn into<T: ClientDataDefinition>(self, sim: &SimConnect) -> Option<T> {
        let define_id = *sim.client_data_definitions.get(&TypeId::of::<T>())?;
        if define_id != { self._base.dwDefineID } {
            return None;
        }
        read_payload(self.bytes, CLIENT_DATA_OFFSET)
    }
}

impl Recv<'_, sys::SIMCONNECT_RECV_FACILITY_DATA> {
    /// The request id passed to `request_facility_data`.
    pub fn id(&self) -> sys::DWORD {
        self.UserRequestId
    }

    pub fn data_type(&self) -> sys::SIMCONNECT_FACILITY_DATA_TYPE {
        self.Type
    }

    /// `(index, count)` for records that are part of a list, like runways.
    pub fn list_item(&self) -> Option<(sys::DWORD, sys::DWORD)> {
        (self.IsListItem != 0).then_some((self.ItemIndex, self.ListSize))
    }

    /// Copy the outermost record out of the message. Nested records share the
    /// request id and decode to `None`, as do answers to other requests.
    pub fn into<T: FacilityDefinition>(self, sim: &SimConnect) -> Option<T> {
        if sim.facility_requests.get(&self.id()) != Some(&TypeId::of::<T>()) {
            return None;
        }
        if { self.ParentUniqueRequestId } != 0 {
            return None;
        }
        read_payload(self.bytes, FACILITY_DATA_OFFSET)
    }
}

impl sys::SIMCONNECT_RECV_FACILITY_DATA_END {
    pub fn id(&self) -> sys::DWORD {
        self.RequestId
    }
}

impl Recv<'_, sys::SIMCONNECT_RECV_AIRPORT_LIST> {
    pub fn id(&self) -> sys::DWORD {
        self._base.dwRequestID
    }

    /// The airports in this message. Entries missing from a truncated
    /// message are left out.
    pub fn data(&self) -> Vec<sys::SIMCONNECT_DATA_FACILITY_AIRPORT> {
        let offset = std::mem::offset_of!(sys::SIMCONNECT_RECV_AIRPORT_LIST, rgData);
        let entry_size = size_of::<sys::SIMCONNECT_DATA_FACILITY_AIRPORT>();
        let array_size = self._base.dwArraySize as usize;
        self.bytes
            .get(offset..)
            .unwrap_or_default()
            .chunks_exact(entry_size)
            .take(array_size)
            .map(|chunk| unsafe {
                std::ptr::read_unaligned(chunk.as_ptr() as *const sys::SIMCONNECT_DATA_FACILITY_AIRPORT)
            })
            .collect()
    }
}

/// A readable name for a `SIMCONNECT_EXCEPTION` code.
pub fn exception_name(code: sys::SIMCONNECT_EXCEPTION) -> &'static str {
    match code {
        sys::SIMCONNECT_EXCEPTION_NONE => "NONE",
        sys::SIMCONNECT_EXCEPTION_ERROR => "ERROR",
        sys::SIMCONNECT_EXCEPTION_SIZE_MISMATCH => "SIZE_MISMATCH",
        sys::SIMCONNECT_EXCEPTION_UNRECOGNIZED_ID => "UNRECOGNIZED_ID",
        sys::SIMCONNECT_EXCEPTION_UNOPENED => "UNOPENED",
        sys::SIMCONNECT_EXCEPTION_VERSION_MISMATCH => "VERSION_MISMATCH",
        sys::SIMCONNECT_EXCEPTION_TOO_MANY_GROUPS => "TOO_MANY_GROUPS",
        sys::SIMCONNECT_EXCEPTION_NAME_UNRECOGNIZED => "NAME_UNRECOGNIZED",
        sys::SIMCONNECT_EXCEPTION_TOO_MANY_EVENT_NAMES => "TOO_MANY_EVENT_NAMES",
        sys::SIMCONNECT_EXCEPTION_EVENT_ID_DUPLICATE => "EVENT_ID_DUPLICATE",
        sys::SIMCONNECT_EXCEPTION_TOO_MANY_MAPS => "TOO_MANY_MAPS",
        sys::SIMCONNECT_EXCEPTION_TOO_MANY_OBJECTS => "TOO_MANY_OBJECTS",
        sys::SIMCONNECT_EXCEPTION_TOO_MANY_REQUESTS => "TOO_MANY_REQUESTS",
        sys::SIMCONNECT_EXCEPTION_INVALID_DATA_TYPE => "INVALID_DATA_TYPE",
        sys::SIMCONNECT_EXCEPTION_INVALID_DATA_SIZE => "INVALID_DATA_SIZE",
        sys::SIMCONNECT_EXCEPTION_DATA_ERROR => "DATA_ERROR",
        sys::SIMCONNECT_EXCEPTION_INVALID_ARRAY => "INVALID_ARRAY",
        sys::SIMCONNECT_EXCEPTION_CREATE_OBJECT_FAILED => "CREATE_OBJECT_FAILED",
        sys::SIMCONNECT_EXCEPTION_LOAD_FLIGHTPLAN_FAILED => "LOAD_FLIGHTPLAN_FAILED",
        sys::SIMCONNECT_EXCEPTION_OPERATION_INVALID_FOR_OBJECT_TYPE => {
            "OPERATION_INVALID_FOR_OBJECT_TYPE"
        }
        sys::SIMCONNECT_EXCEPTION_ILLEGAL_OPERATION => "ILLEGAL_OPERATION",
        sys::SIMCONNECT_EXCEPTION_ALREADY_SUBSCRIBED => "ALREADY_SUBSCRIBED",
        sys::SIMCONNECT_EXCEPTION_INVALID_ENUM => "INVALID_ENUM",
        sys::SIMCONNECT_EXCEPTION_DEFINITION_ERROR => "DEFINITION_ERROR",
        sys::SIMCONNECT_EXCEPTION_DUPLICATE_ID => "DUPLICATE_ID",
        sys::SIMCONNECT_EXCEPTION_DATUM_ID => "DATUM_ID",
        sys::SIMCONNECT_EXCEPTION_OUT_OF_BOUNDS => "OUT_OF_BOUNDS",
        sys::SIMCONNECT_EXCEPTION_ALREADY_CREATED => "ALREADY_CREATED",
        sys::SIMCONNECT_EXCEPTION_OBJECT_OUTSIDE_REALITY_BUBBLE => "OBJECT_OUTSIDE_REALITY_BUBBLE",
        _ => "UNKNOWN",
    }
}

/// How often a data request delivers its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Stops delivery.
    Never = sys::SIMCONNECT_PERIOD_NEVER as isize,
    /// A single delivery. Prefer a recurring period for data read regularly.
    Once = sys::SIMCONNECT_PERIOD_ONCE as isize,
    /// Every rendered frame.
    VisualFrame = sys::SIMCONNECT_PERIOD_VISUAL_FRAME as isize,
    /// Every simulation frame, rendered or not.
    SimFrame = sys::SIMCONNECT_PERIOD_SIM_FRAME as isize,
    /// Once per second.
    Second = sys::SIMCONNECT_PERIOD_SECOND as isize,
}

/// A client data region created in the simulator. The region outlives this
/// handle.
#[derive(Debug)]
pub struct ClientDataArea<T: ClientDataDefinition> {
    client_id: sys::SIMCONNECT_CLIENT_DATA_ID,
    phantom: PhantomData<T>,
}

impl<T: ClientDataDefinition> ClientDataArea<T> {
    pub fn client_id(&self) -> sys::SIMCONNECT_CLIENT_DATA_ID {
        self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[repr(C, packed)]
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Altitude {
        feet: f64,
        on_ground: i32,
    }

    impl DataDefinition for Altitude {
        const DEFINITIONS: &'static [(&'static str, &'static str, f32, sys::SIMCONNECT_DATATYPE)] = &[
            ("PLANE ALTITUDE", "feet", 0.0, sys::SIMCONNECT_DATATYPE_FLOAT64),
            ("SIM ON GROUND", "bool", 0.0, sys::SIMCONNECT_DATATYPE_INT32),
        ];
    }

    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Lights {
        brightness: f64,
        on: u8,
    }

    impl ClientDataDefinition for Lights {
        fn get_definitions() -> Vec<(usize, usize, f32)> {
            vec![(0, 8, 0.0), (8, 1, 0.0)]
        }
    }

    #[repr(C, packed)]
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Airport {
        latitude: f64,
        longitude: f64,
    }

    impl FacilityDefinition for Airport {
        const FIELDS: &'static [&'static str] =
            &["OPEN AIRPORT", "LATITUDE", "LONGITUDE", "CLOSE AIRPORT"];
    }

    fn header(id: sys::SIMCONNECT_RECV_ID, size: usize) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(size as u32).to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&id.to_le_bytes());
        bytes
    }

    fn simobject_data(define_id: u32, payload: &[u8]) -> Vec<u8> {
        data_message(sys::SIMCONNECT_RECV_ID_SIMOBJECT_DATA, define_id, payload)
    }

    fn data_message(id: sys::SIMCONNECT_RECV_ID, define_id: u32, payload: &[u8]) -> Vec<u8> {
        let size = SIMOBJECT_DATA_OFFSET + payload.len();
        let mut bytes = header(id, size);
        // request, object, define, flags, entry, out of, define count
        for word in [7u32, 0, define_id, 0, 1, 1, 2] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(payload);
        bytes
    }

    fn facility_data(request_id: u32, parent: u32, payload: &[u8]) -> Vec<u8> {
        let size = FACILITY_DATA_OFFSET + payload.len();
        let mut bytes = header(sys::SIMCONNECT_RECV_ID_FACILITY_DATA, size);
        // request, unique request, parent, type, list item, index, list size
        for word in [request_id, 11, parent, sys::SIMCONNECT_FACILITY_DATA_AIRPORT, 0, 0, 0] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(payload);
        bytes
    }

    fn altitude_payload(feet: f64, on_ground: i32) -> Vec<u8> {
        let mut payload = feet.to_le_bytes().to_vec();
        payload.extend_from_slice(&on_ground.to_le_bytes());
        payload
    }

    fn session() -> SimConnect<'static> {
        SimConnect::with_handle(1, |_, _| {})
    }

    #[test]
    fn hresult_maps() {
        assert!(map_err(sys::S_OK).is_ok());
        assert!(map_err(1).is_ok());
        let err = map_err(sys::E_FAIL).unwrap_err();
        assert!(matches!(err, Error::HResult(HResult(sys::E_FAIL))));
        assert_eq!(
            HResult(sys::E_FAIL).to_string(),
            "SimConnect call failed with HRESULT 0x80004005"
        );
    }

    #[test]
    #[cfg(not(feature = "simconnect"))]
    fn open_fails_without_simulator() {
        let err = SimConnect::open("test", |_, _| {}).unwrap_err();
        assert!(matches!(err, Error::HResult(_)));
    }

    #[test]
    fn parses_events() {
        let mut bytes = header(sys::SIMCONNECT_RECV_ID_EVENT, 24);
        for word in [2u32, 5, 42] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        match SimConnectRecv::parse(&bytes) {
            Some(SimConnectRecv::Event(event)) => {
                assert_eq!(event.id(), 5);
                assert_eq!(event.data(), 42);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_truncated_and_unknown_messages() {
        assert!(SimConnectRecv::parse(&[0; 4]).is_none());
        let truncated = header(sys::SIMCONNECT_RECV_ID_EVENT, 12);
        assert!(SimConnectRecv::parse(&truncated).is_none());
        let unknown = header(999, 12);
        assert!(SimConnectRecv::parse(&unknown).is_none());
        let null = header(sys::SIMCONNECT_RECV_ID_NULL, 12);
        assert!(matches!(SimConnectRecv::parse(&null), Some(SimConnectRecv::Null)));
    }

    #[test]
    fn by_type_data_is_simobject_data() {
        let mut bytes = simobject_data(0, &[0; 12]);
        bytes[8..12].copy_from_slice(&sys::SIMCONNECT_RECV_ID_SIMOBJECT_DATA_BYTYPE.to_le_bytes());
        assert!(matches!(
            SimConnectRecv::parse(&bytes),
            Some(SimConnectRecv::SimObjectData(_))
        ));
    }

    #[test]
    fn simobject_data_into_checks_definition() {
        let mut sim = session();
        sim.data_definitions.insert(TypeId::of::<Altitude>(), 3);

        let payload = altitude_payload(1234.5, 1);

        let bytes = simobject_data(3, &payload);
        let Some(SimConnectRecv::SimObjectData(data)) = SimConnectRecv::parse(&bytes) else {
            panic!("not simobject data");
        };
        assert_eq!(data.id(), 7);
        assert_eq!(
            data.into::<Altitude>(&sim),
            Some(Altitude {
                feet: 1234.5,
                on_ground: 1
            })
        );

        let other = simobject_data(4, &payload);
        let Some(SimConnectRecv::SimObjectData(data)) = SimConnectRecv::parse(&other) else {
            panic!("not simobject data");
        };
        assert_eq!(data.into::<Altitude>(&sim), None);

        let short = simobject_data(3, &payload[..8]);
        let Some(SimConnectRecv::SimObjectData(data)) = SimConnectRecv::parse(&short) else {
            panic!("not simobject data");
        };
        assert_eq!(data.into::<Altitude>(&sim), None);
    }

    #[test]
    fn unregistered_definitions_are_not_decoded() {
        let sim = session();
        let bytes = simobject_data(0, &[0; 12]);
        let Some(SimConnectRecv::SimObjectData(data)) = SimConnectRecv::parse(&bytes) else {
            panic!("not simobject data");
        };
        assert_eq!(data.into::<Altitude>(&sim), None);
    }

    #[test]
    fn define_ids_are_only_kept_on_success() {
        let mut sim = session();
        assert!(sim.get_define_id::<Altitude>().is_err());
        assert!(sim.data_definitions.is_empty());

        let mut map = HashMap::new();
        let first = SimConnect::get_id::<Altitude, u32, _>(&mut map, 0, |_| Ok(())).unwrap();
        let again = SimConnect::get_id::<Altitude, u32, _>(&mut map, 1, |_| panic!("registered twice")).unwrap();
        let second = SimConnect::get_id::<u8, u32, _>(&mut map, 1, |_| Ok(())).unwrap();
        assert_eq!((first, again, second), (0, 0, 1));
    }

    #[test]
    fn facility_definitions_follow_data_definitions() {
        let mut sim = session();
        sim.data_definitions.insert(TypeId::of::<Altitude>(), 0);
        sim.facility_definitions.insert(TypeId::of::<Airport>(), 1);
        assert_eq!(sim.next_define_id(), 2);
        assert_eq!(sim.get_define_id::<Altitude>().unwrap(), 0);
        assert_eq!(sim.get_facility_define_id::<Airport>().unwrap(), 1);
    }

    #[test]
    #[cfg(not(feature = "simconnect"))]
    fn failed_facility_request_is_not_recorded() {
        let mut sim = session();
        assert!(sim.request_facility_data::<Airport>(5, "EDDF", None).is_err());
        assert!(sim.facility_definitions.is_empty());
        assert!(sim.facility_requests.is_empty());
        assert!(sim.request_facilities_list_ex1(sys::SIMCONNECT_FACILITY_LIST_TYPE_AIRPORT, 6).is_err());
    }

    #[test]
    fn callback_reads_data_through_session() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut sim = SimConnect::with_handle(1, move |sim, recv| match recv {
            SimConnectRecv::SimObjectData(data) => {
                sink.borrow_mut().push(format!("{:?}", data.into::<Altitude>(sim)))
            }
            SimConnectRecv::ClientData(data) => {
                sink.borrow_mut().push(format!("{:?}", data.into::<Lights>(sim)))
            }
            _ => {}
        });
        sim.data_definitions.insert(TypeId::of::<Altitude>(), 0);
        sim.client_data_definitions.insert(TypeId::of::<Lights>(), 0);

        sim.dispatch(&simobject_data(0, &altitude_payload(3000.0, 0)));
        let mut lights = 0.75f64.to_le_bytes().to_vec();
        lights.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0]);
        sim.dispatch(&data_message(sys::SIMCONNECT_RECV_ID_CLIENT_DATA, 0, &lights));
        sim.dispatch(&data_message(sys::SIMCONNECT_RECV_ID_CLIENT_DATA, 0, &lights[..8]));

        assert_eq!(
            *seen.borrow(),
            [
                format!("{:?}", Some(Altitude { feet: 3000.0, on_ground: 0 })),
                format!("{:?}", Some(Lights { brightness: 0.75, on: 1 })),
                "None".to_owned(),
            ]
        );
    }

    #[test]
    fn facility_data_decodes_outermost_record() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut sim = SimConnect::with_handle(1, move |sim, recv| match recv {
            SimConnectRecv::FacilityData(data) => {
                assert_eq!(data.data_type(), sys::SIMCONNECT_FACILITY_DATA_AIRPORT);
                assert_eq!(data.list_item(), None);
                sink.borrow_mut().push((data.id(), data.into::<Airport>(sim)));
            }
            SimConnectRecv::FacilityDataEnd(end) => sink.borrow_mut().push((end.id(), None)),
            _ => {}
        });
        sim.facility_requests.insert(5, TypeId::of::<Airport>());

        let mut payload = 50.03f64.to_le_bytes().to_vec();
        payload.extend_from_slice(&8.57f64.to_le_bytes());
        sim.dispatch(&facility_data(5, 0, &payload));
        // A nested record and an answer to an unknown request.
        sim.dispatch(&facility_data(5, 11, &payload));
        sim.dispatch(&facility_data(6, 0, &payload));
        let mut end = header(sys::SIMCONNECT_RECV_ID_FACILITY_DATA_END, 16);
        end.extend_from_slice(&5u32.to_le_bytes());
        sim.dispatch(&end);

        let airport = Airport {
            latitude: 50.03,
            longitude: 8.57,
        };
        assert_eq!(
            *seen.borrow(),
            [(5, Some(airport)), (5, None), (6, None), (5, None)]
        );
    }

    #[test]
    fn event_ids_count_up() {
        let mut sim = session();
        assert!(sim.map_client_event_to_sim_event("TOGGLE_BEACON_LIGHTS", false).is_err());
        assert!(sim.subscribe_to_system_event("Frame").is_err());
        assert_eq!(sim.next_event_id(), 2);
    }

    #[test]
    fn dispatch_reaches_callback() {
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = seen.clone();
        let mut sim = SimConnect::with_handle(1, move |_, recv| {
            if let SimConnectRecv::Quit(_) = recv {
                counter.set(counter.get() + 1);
            }
        });
        sim.dispatch(&header(sys::SIMCONNECT_RECV_ID_QUIT, 12));
        sim.dispatch(&header(999, 12));
        sim.dispatch(&header(sys::SIMCONNECT_RECV_ID_QUIT, 12));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn on_close_runs_on_drop() {
        let closed = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = closed.clone();
        let mut sim = Box::pin(session());
        sim.as_mut().set_on_close(move || flag.set(true));
        drop(sim);
        assert!(closed.get());
    }

    #[test]
    fn padding_follows_last_field() {
        assert_eq!(tail_padding(16, &[(0, 8, 0.0), (8, 4, 0.0)]), Some((12, 4)));
        assert_eq!(tail_padding(16, &[(8, 8, 0.0), (0, 4, 0.0)]), None);
        assert_eq!(tail_padding(16, &[]), None);
    }

    #[test]
    fn recv_buffer_round_trips() {
        let bytes = simobject_data(0, &[1, 2, 3, 4]);
        let recv = SimConnectRecv::parse(&bytes).unwrap();
        let buffer = RecvBuffer::from(&recv);
        assert_eq!(buffer.recv().unwrap().bytes(), &bytes[..]);
    }

    #[test]
    fn open_reports_application_name() {
        let mut bytes = header(sys::SIMCONNECT_RECV_ID_OPEN, size_of::<sys::SIMCONNECT_RECV_OPEN>());
        let mut name = [0u8; 256];
        name[..19].copy_from_slice(b"KittyHawk Simulator");
        bytes.extend_from_slice(&name);
        bytes.extend_from_slice(&[0; 40]);
        let Some(SimConnectRecv::Open(open)) = SimConnectRecv::parse(&bytes) else {
            panic!("not an open message");
        };
        assert_eq!(open.application_name(), "KittyHawk Simulator");
    }

    #[test]
    fn airport_list_is_bounded_by_buffer() {
        let entry = size_of::<sys::SIMCONNECT_DATA_FACILITY_AIRPORT>();
        let mut bytes = header(sys::SIMCONNECT_RECV_ID_AIRPORT_LIST, 0);
        // request, array size, entry number, out of
        for word in [1u32, 3, 0, 1] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        let mut airport = vec![0u8; entry];
        airport[..4].copy_from_slice(b"EDDF");
        bytes.extend_from_slice(&airport);
        bytes.extend_from_slice(&airport);
        let Some(SimConnectRecv::AirportList(list)) = SimConnectRecv::parse(&bytes) else {
            panic!("not an airport list");
        };
        let airports = list.data();
        assert_eq!(airports.len(), 2);
        assert_eq!({ airports[0].Ident }[0] as u8, b'E');
    }

    #[test]
    fn exception_names() {
        assert_eq!(exception_name(sys::SIMCONNECT_EXCEPTION_UNRECOGNIZED_ID), "UNRECOGNIZED_ID");
        assert_eq!(exception_name(1000), "UNKNOWN");
    }
}
