/// FFI declarations for the IOGraphicsLib display calls `io-kit-sys` does not cover.
use core_foundation_sys::dictionary::CFDictionaryRef;
use core_foundation_sys::string::CFStringRef;
use io_kit_sys::types::io_object_t;

/// `IOOptionBits`.
pub type OptionBits = u32;

/// `kNilOptions`.
pub const NIL_OPTIONS: OptionBits = 0;

/// `kIODisplayOnlyPreferredName`: keep only the preferred localization of each name.
pub const ONLY_PREFERRED_NAME: OptionBits = 0x0000_0200;

/// `kIODisplayBrightnessKey`.
pub const BRIGHTNESS_KEY: &str = "brightness";

/// `kDisplayProductName`: locale identifier to product name.
pub const DISPLAY_PRODUCT_NAME: &str = "DisplayProductName";

#[link(name = "IOKit", kind = "framework")]
unsafe extern "C" {
    /// Returns a +1 retained dictionary, or null.
    pub fn IODisplayCreateInfoDictionary(
        framebuffer: io_object_t,
        options: OptionBits,
    ) -> CFDictionaryRef;

    pub fn IODisplayGetFloatParameter(
        service: io_object_t,
        options: OptionBits,
        parameter_name: CFStringRef,
        value: *mut f32,
    ) -> i32;

    pub fn IODisplaySetFloatParameter(
        service: io_object_t,
        options: OptionBits,
        parameter_name: CFStringRef,
        value: f32,
    ) -> i32;
}
