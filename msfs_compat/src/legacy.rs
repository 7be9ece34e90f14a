//! Bindings to the Legacy/gauges.h API

use crate::error::{Error, Result};
use crate::sys;
use std::ffi::{CStr, CString};

/// Conversion between a simulator `f64` and a Rust value.
pub trait SimValue: Sized {
    fn from_f64(v: f64) -> Self;
    fn into_f64(self) -> f64;
}

impl SimValue for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn into_f64(self) -> f64 {
        self
    }
}

impl SimValue for bool {
    fn from_f64(v: f64) -> Self {
        v != 0.0
    }

    fn into_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

macro_rules! cast_sim_value {
    ($($ty:ty),*) => {
        $(
            impl SimValue for $ty {
                fn from_f64(v: f64) -> Self {
                    v as Self
                }

                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

cast_sim_value!(f32, u8, i32, u32);

/// aircraft_varget
pub fn aircraft_varget(simvar: sys::ENUM, units: sys::ENUM, index: sys::SINT32) -> f64 {
    unsafe { sys::aircraft_varget(simvar, units, index) }
}

/// get_aircraft_var_enum
///
/// The simulator answers `-1` for unknown names.
pub fn get_aircraft_var_enum(name: &str) -> Result<sys::ENUM> {
    let name = CString::new(name)?;
    Ok(unsafe { sys::get_aircraft_var_enum(name.as_ptr()) })
}

/// get_units_enum
pub fn get_units_enum(unitname: &str) -> Result<sys::ENUM> {
    let name = CString::new(unitname)?;
    Ok(unsafe { sys::get_units_enum(name.as_ptr()) })
}

/// A resolved aircraft variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AircraftVariable {
    simvar: sys::ENUM,
    units: sys::ENUM,
    index: sys::SINT32,
}

impl AircraftVariable {
    pub fn from(name: &str, units: &str, index: usize) -> Result<Self> {
        let simvar = get_aircraft_var_enum(name)?;
        if simvar == -1 {
            return Err(Error::UnknownVariable(name.to_owned()));
        }

        let units_enum = get_units_enum(units)?;
        if units_enum == -1 {
            return Err(Error::UnknownUnits(units.to_owned()));
        }

        Ok(Self {
            simvar,
            units: units_enum,
            index: index as sys::SINT32,
        })
    }

    pub fn get<T: SimValue>(&self) -> T {
        T::from_f64(aircraft_varget(self.simvar, self.units, self.index))
    }
}

/// register_named_variable
/// get_named_variable_value
/// set_named_variable_value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedVariable(sys::ID);

impl NamedVariable {
    /// Registers the variable, or returns the existing one with that name.
    pub fn from(name: &str) -> Result<Self> {
        let name = CString::new(name)?;
        Ok(Self(unsafe { sys::register_named_variable(name.as_ptr()) }))
    }

    /// Looks up a variable without registering it.
    pub fn lookup(name: &str) -> Result<Option<Self>> {
        let name = CString::new(name)?;
        let id = unsafe { sys::check_named_variable(name.as_ptr()) };
        Ok((id != -1).then_some(Self(id)))
    }

    pub fn id(&self) -> sys::ID {
        self.0
    }

    pub fn name(&self) -> Option<String> {
        let name = unsafe { sys::get_name_of_named_variable(self.0) };
        if name.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
        }
    }

    pub fn get_value<T: SimValue>(&self) -> T {
        T::from_f64(unsafe { sys::get_named_variable_value(self.0) })
    }

    pub fn set_value(&self, v: impl SimValue) {
        unsafe { sys::set_named_variable_value(self.0, v.into_f64()) }
    }

    pub fn get_typed_value<T: SimValue>(&self, units: sys::ENUM) -> T {
        T::from_f64(unsafe { sys::get_named_variable_typed_value(self.0, units) })
    }

    pub fn set_typed_value(&self, v: impl SimValue, units: sys::ENUM) {
        unsafe { sys::set_named_variable_typed_value(self.0, v.into_f64(), units) }
    }
}

/// trigger_key_event
pub fn trigger_key_event(event_id: sys::ID32, value: sys::UINT32) {
    unsafe { sys::trigger_key_event(event_id, value) }
}

/// trigger_key_event_EX1
pub fn trigger_key_event_ex1(event_id: sys::ID32, values: [sys::UINT32; 5]) {
    let [v0, v1, v2, v3, v4] = values;
    unsafe { sys::trigger_key_event_EX1(event_id, v0, v1, v2, v3, v4) }
}

#[doc(hidden)]
pub trait ExecuteCalculatorCodeImpl: Sized {
    fn execute(code: &CStr) -> Option<Self>;
}

#[doc(hidden)]
impl ExecuteCalculatorCodeImpl for f64 {
    fn execute(code: &CStr) -> Option<Self> {
        let mut n = 0.0;
        let ok = unsafe {
            sys::execute_calculator_code(
                code.as_ptr(),
                &mut n,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        (ok == sys::TRUE).then_some(n)
    }
}

#[doc(hidden)]
impl ExecuteCalculatorCodeImpl for i32 {
    fn execute(code: &CStr) -> Option<Self> {
        let mut n = 0;
        let ok = unsafe {
            sys::execute_calculator_code(
                code.as_ptr(),
                std::ptr::null_mut(),
                &mut n,
                std::ptr::null_mut(),
            )
        };
        (ok == sys::TRUE).then_some(n)
    }
}

#[doc(hidden)]
impl ExecuteCalculatorCodeImpl for String {
    fn execute(code: &CStr) -> Option<Self> {
        let mut s = std::ptr::null();
        let ok = unsafe {
            sys::execute_calculator_code(
                code.as_ptr(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                &mut s,
            )
        };
        if ok != sys::TRUE {
            return None;
        }
        if s.is_null() {
            return Some(String::new());
        }
        Some(unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned())
    }
}

#[doc(hidden)]
impl ExecuteCalculatorCodeImpl for () {
    fn execute(code: &CStr) -> Option<Self> {
        let ok = unsafe {
            sys::execute_calculator_code(
                code.as_ptr(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        (ok == sys::TRUE).then_some(())
    }
}

/// execute_calculator_code
pub fn execute_calculator_code<T: ExecuteCalculatorCodeImpl>(code: &str) -> Result<T> {
    let c_code = CString::new(code)?;
    T::execute(c_code.as_c_str()).ok_or_else(|| Error::Calculator(code.to_owned()))
}

/// Holds compiled calculator code, wraps `gauge_calculator_code_precompile`.
#[derive(Debug)]
pub struct CompiledCalculatorCode {
    source: String,
    p_compiled: sys::PCSTRINGZ,
    _p_compiled_size: sys::UINT32,
}

impl CompiledCalculatorCode {
    pub fn new(code: &str) -> Result<Self> {
        let c_code = CString::new(code)?;
        let mut p_compiled = std::ptr::null();
        let mut p_compiled_size = 0;
        let ok = unsafe {
            sys::gauge_calculator_code_precompile(&mut p_compiled, &mut p_compiled_size, c_code.as_ptr())
        };
        if ok == sys::FALSE || p_compiled.is_null() {
            return Err(Error::Calculator(code.to_owned()));
        }
        Ok(Self {
            source: code.to_owned(),
            p_compiled,
            _p_compiled_size: p_compiled_size,
        })
    }

    pub fn execute<T: ExecuteCalculatorCodeImpl>(&self) -> Result<T> {
        T::execute(unsafe { CStr::from_ptr(self.p_compiled) })
            .ok_or_else(|| Error::Calculator(self.source.clone()))
    }
}
