//! Bindings to the MSFS 2024 `fsVars*` and `fsEvents*` API.
//!
//! These supersede the legacy named variable and key event functions. Indexed
//! variables and key event parameters are passed as a [`sys::FsVarParamArray`]
//! built on the stack for the duration of the call.

use crate::error::{Error, Result};
use crate::legacy::SimValue;
use crate::sys;
use std::ffi::CString;

const MAX_KEY_EVENT_PARAMS: usize = 5;

fn check(code: sys::FsVarError) -> Result<()> {
    if code == sys::FS_VAR_ERROR_NONE {
        Ok(())
    } else {
        Err(Error::Vars(code))
    }
}

fn unit_id(units: &str) -> Result<sys::FsUnitId> {
    let c_units = CString::new(units)?;
    match unsafe { sys::fsVarsGetUnitId(c_units.as_ptr()) } {
        -1 => Err(Error::UnknownUnits(units.to_owned())),
        id => Ok(id),
    }
}

fn integer_param(value: u32) -> sys::FsVarParamVariant {
    sys::FsVarParamVariant {
        type_: sys::FsVarParamTypeInteger,
        value: sys::FsVarParamValue { intValue: value },
    }
}

fn param_array(params: &mut [sys::FsVarParamVariant]) -> sys::FsVarParamArray {
    sys::FsVarParamArray {
        size: params.len() as u32,
        array: params.as_mut_ptr(),
    }
}

/// An aircraft simulation variable addressed through the Vars API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftVar {
    name: String,
    simvar: sys::FsSimVarId,
    unit: sys::FsUnitId,
    index: u32,
}

impl AircraftVar {
    pub fn from(name: &str, units: &str, index: u32) -> Result<Self> {
        let c_name = CString::new(name)?;
        let simvar = unsafe { sys::fsVarsGetAircraftVarId(c_name.as_ptr()) };
        if simvar == -1 {
            return Err(Error::UnknownVariable(name.to_owned()));
        }
        Ok(Self {
            name: name.to_owned(),
            simvar,
            unit: unit_id(units)?,
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get<T: SimValue>(&self) -> Result<T> {
        let mut params = [integer_param(self.index)];
        let mut v = 0.0;
        check(unsafe {
            sys::fsVarsAircraftVarGet(self.simvar, self.unit, param_array(&mut params), &mut v)
        })?;
        Ok(T::from_f64(v))
    }

    pub fn set(&self, value: impl SimValue) -> Result<()> {
        let mut params = [integer_param(self.index)];
        check(unsafe {
            sys::fsVarsAircraftVarSet(
                self.simvar,
                self.unit,
                param_array(&mut params),
                value.into_f64(),
            )
        })
    }
}

/// A named (`L:`) variable with a fixed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedVar {
    id: sys::FsNamedVarId,
    unit: sys::FsUnitId,
}

impl NamedVar {
    /// Registers the variable, or returns the existing one with that name.
    pub fn register(name: &str, units: &str) -> Result<Self> {
        let c_name = CString::new(name)?;
        let id = unsafe { sys::fsVarsRegisterNamedVar(c_name.as_ptr()) };
        if id == -1 {
            return Err(Error::UnknownVariable(name.to_owned()));
        }
        Ok(Self {
            id,
            unit: unit_id(units)?,
        })
    }

    pub fn get<T: SimValue>(&self) -> Result<T> {
        let mut v = 0.0;
        check(unsafe { sys::fsVarsNamedVarGet(self.id, self.unit, &mut v) })?;
        Ok(T::from_f64(v))
    }

    pub fn set(&self, value: impl SimValue) -> Result<()> {
        check(unsafe { sys::fsVarsNamedVarSet(self.id, self.unit, value.into_f64()) })
    }
}

/// A key event resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent(sys::FsEventId);

impl KeyEvent {
    pub fn from_name(name: &str) -> Result<Self> {
        let c_name = CString::new(name)?;
        match unsafe { sys::fsEventsGetKeyEventId(c_name.as_ptr()) } {
            -1 => Err(Error::UnknownVariable(name.to_owned())),
            id => Ok(Self(id)),
        }
    }

    /// Triggers the event with up to five integer parameters.
    pub fn trigger(&self, values: &[u32]) -> Result<()> {
        if values.len() > MAX_KEY_EVENT_PARAMS {
            return Err(Error::Vars(-1));
        }
        let mut params: Vec<_> = values.iter().copied().map(integer_param).collect();
        check(unsafe { sys::fsEventsTriggerKeyEvent(self.0, param_array(&mut params)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_integers() {
        let mut params = [integer_param(3), integer_param(4)];
        let array = param_array(&mut params);
        let size = array.size;
        assert_eq!(size, 2);
        let first = params[0];
        let ty = first.type_;
        assert_eq!(ty, sys::FsVarParamTypeInteger);
        assert_eq!(unsafe { first.value.intValue }, 3);
    }

    #[test]
    fn host_without_simulator_reports_unknown() {
        assert!(matches!(
            AircraftVar::from("PLANE ALTITUDE", "feet", 0),
            Err(Error::UnknownVariable(_))
        ));
        assert!(matches!(
            NamedVar::register("A32NX_TEST", "number"),
            Err(Error::UnknownVariable(_))
        ));
        assert!(KeyEvent::from_name("TOGGLE_BEACON_LIGHTS").is_err());
    }

    #[test]
    fn trigger_rejects_extra_params() {
        let event = KeyEvent(7);
        assert!(matches!(event.trigger(&[0; 6]), Err(Error::Vars(-1))));
        assert!(matches!(event.trigger(&[1]), Err(Error::Vars(-1))));
    }

    #[test]
    fn error_codes_map() {
        assert!(check(sys::FS_VAR_ERROR_NONE).is_ok());
        assert!(matches!(check(2), Err(Error::Vars(2))));
    }
}
