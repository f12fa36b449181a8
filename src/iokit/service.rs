/// IOKit-backed display service: `IODisplayConnect` enumeration and brightness get/set.
use std::ffi::CStr;

use core_foundation::base::TCFType;
use core_foundation::string::CFString;
use io_kit_sys::types::{io_iterator_t, io_object_t};
use io_kit_sys::{
    IOIteratorIsValid, IOIteratorNext, IOObjectRelease, IOServiceGetMatchingServices,
    IOServiceMatching, kIOMasterPortDefault,
};

use super::errors::{IOKitError, ReturnCode, check_io_return};
use super::graphics::{
    BRIGHTNESS_KEY, IODisplayGetFloatParameter, IODisplaySetFloatParameter, NIL_OPTIONS,
};
use super::name::display_name;
use crate::display::{BrightnessError, DisplayDevice, DisplayService};

/// IOKit class of display connections.
const DISPLAY_CONNECT_CLASS: &CStr = c"IODisplayConnect";

/// `IO_OBJECT_NULL`.
const IO_OBJECT_NULL: io_object_t = 0;

/// The macOS display service.
#[derive(Debug, Default, Clone, Copy)]
pub struct IOKitService;

impl DisplayService for IOKitService {
    type Device = IODisplay;
    type Devices = IODisplays;

    fn displays(&self) -> Result<IODisplays, BrightnessError> {
        // SAFETY: static C string; returns a +1 dictionary or null.
        let matching = unsafe { IOServiceMatching(DISPLAY_CONNECT_CLASS.as_ptr()) };
        if matching.is_null() {
            return Err(IOKitError::NoMatchingDictionary(
                DISPLAY_CONNECT_CLASS.to_string_lossy().into_owned(),
            )
            .into());
        }

        let mut iter: io_iterator_t = IO_OBJECT_NULL;
        // SAFETY: consumes the reference to `matching`; `iter` is a valid out-pointer.
        let code = unsafe {
            IOServiceGetMatchingServices(kIOMasterPortDefault, matching as _, &mut iter)
        };
        check_io_return(code, "IOServiceGetMatchingServices")
            .map_err(|err| platform_error(err, |code| BrightnessError::Enumerate { code }))?;
        Ok(IODisplays { raw: iter })
    }
}

/// Map an IOKit failure into a domain error carrying its return code.
fn platform_error(err: IOKitError, wrap: fn(ReturnCode) -> BrightnessError) -> BrightnessError {
    match err.code() {
        Some(code) => wrap(code),
        None => err.into(),
    }
}

/// Owned iterator over matching display services. Released on drop.
pub struct IODisplays {
    raw: io_iterator_t,
}

impl Iterator for IODisplays {
    type Item = IODisplay;

    fn next(&mut self) -> Option<IODisplay> {
        // SAFETY: `raw` is a live iterator until drop.
        if unsafe { IOIteratorIsValid(self.raw) } == 0 {
            return None;
        }
        // SAFETY: as above. Returns a +1 object or IO_OBJECT_NULL when exhausted.
        let raw = unsafe { IOIteratorNext(self.raw) };
        if raw == IO_OBJECT_NULL {
            None
        } else {
            Some(IODisplay { raw })
        }
    }
}

impl Drop for IODisplays {
    fn drop(&mut self) {
        // SAFETY: we own the iterator's reference.
        unsafe {
            IOObjectRelease(self.raw);
        }
    }
}

/// Owned handle to one `IODisplayConnect` service. Released on drop.
pub struct IODisplay {
    raw: io_object_t,
}

impl std::fmt::Debug for IODisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IODisplay").field("raw", &self.raw).finish()
    }
}

impl DisplayDevice for IODisplay {
    fn name(&self) -> Option<String> {
        display_name(self.raw)
    }

    fn brightness(&self) -> Result<f32, BrightnessError> {
        let key = CFString::from_static_string(BRIGHTNESS_KEY);
        let mut value: f32 = 0.0;
        // SAFETY: `raw` is live; `key` outlives the call; `value` is a valid out-pointer.
        let code = unsafe {
            IODisplayGetFloatParameter(self.raw, NIL_OPTIONS, key.as_concrete_TypeRef(), &mut value)
        };
        check_io_return(code, "IODisplayGetFloatParameter")
            .map_err(|err| platform_error(err, |code| BrightnessError::Read { code }))?;
        Ok(value)
    }

    fn set_brightness(&self, value: f32) -> Result<(), BrightnessError> {
        let key = CFString::from_static_string(BRIGHTNESS_KEY);
        // SAFETY: `raw` is live; `key` outlives the call.
        let code = unsafe {
            IODisplaySetFloatParameter(self.raw, NIL_OPTIONS, key.as_concrete_TypeRef(), value)
        };
        check_io_return(code, "IODisplaySetFloatParameter")
            .map_err(|err| platform_error(err, |code| BrightnessError::Write { code }))
    }
}

impl Drop for IODisplay {
    fn drop(&mut self) {
        // SAFETY: we own the reference returned by IOIteratorNext.
        unsafe {
            IOObjectRelease(self.raw);
        }
    }
}
