/// Best-effort display name lookup from the IOKit display info dictionary.
use std::ffi::c_void;

use core_foundation::base::TCFType;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};
use core_foundation_sys::base::CFGetTypeID;
use core_foundation_sys::dictionary::{
    CFDictionaryGetCount, CFDictionaryGetKeysAndValues, CFDictionaryGetTypeID,
    CFDictionaryGetValue,
};
use core_foundation_sys::string::CFStringGetTypeID;
use io_kit_sys::types::io_object_t;

use super::graphics::{DISPLAY_PRODUCT_NAME, IODisplayCreateInfoDictionary, ONLY_PREFERRED_NAME};

/// Resolve the product name of `display`. `None` if any part of the metadata is missing.
pub fn display_name(display: io_object_t) -> Option<String> {
    // SAFETY: `display` is a live io_object_t owned by the caller. The call returns a
    // +1 retained dictionary or null.
    let raw = unsafe { IODisplayCreateInfoDictionary(display, ONLY_PREFERRED_NAME) };
    if raw.is_null() {
        return None;
    }
    // SAFETY: non-null and +1 retained; released when `info` drops.
    let info: CFDictionary = unsafe { CFDictionary::wrap_under_create_rule(raw) };
    product_name(info.as_concrete_TypeRef())
}

/// Look up `DisplayProductName` in an info dictionary and take its first localization.
///
/// The name table is keyed by locale and normally holds one or two entries. Which
/// locale comes first is unspecified; no negotiation is attempted.
fn product_name(info: CFDictionaryRef) -> Option<String> {
    let key = CFString::from_static_string(DISPLAY_PRODUCT_NAME);
    // SAFETY: `info` is a valid dictionary for the duration of this call. The
    // returned value follows the get rule and is not released here.
    let names = unsafe { CFDictionaryGetValue(info, key.as_CFTypeRef()) };
    // SAFETY: `names` is non-null when type-checked.
    if names.is_null() || unsafe { CFGetTypeID(names) != CFDictionaryGetTypeID() } {
        return None;
    }
    first_localized_name(names as CFDictionaryRef)
}

fn first_localized_name(names: CFDictionaryRef) -> Option<String> {
    // SAFETY: `names` is a valid dictionary (checked by the caller).
    let count = unsafe { CFDictionaryGetCount(names) };
    if !(1..=2).contains(&count) {
        return None;
    }

    let mut values: [*const c_void; 2] = [std::ptr::null(); 2];
    // SAFETY: `values` has room for `count` (at most 2) entries; keys are not requested.
    unsafe { CFDictionaryGetKeysAndValues(names, std::ptr::null_mut(), values.as_mut_ptr()) };

    let first = values[0];
    // SAFETY: `first` is non-null when type-checked.
    if first.is_null() || unsafe { CFGetTypeID(first) != CFStringGetTypeID() } {
        return None;
    }
    // SAFETY: verified CFString; wrap_under_get_rule adds the retain we release on drop.
    let name = unsafe { CFString::wrap_under_get_rule(first as CFStringRef) };
    Some(name.to_string())
}
