/// Selects the display service for the running OS.
use crate::display::DisplayService;

/// The display service for this build target.
#[cfg(target_os = "macos")]
#[must_use]
pub fn service() -> impl DisplayService {
    crate::iokit::IOKitService
}

/// The display service for this build target.
#[cfg(not(target_os = "macos"))]
#[must_use]
pub fn service() -> impl DisplayService {
    unsupported::Unsupported
}

#[cfg(not(target_os = "macos"))]
mod unsupported {
    use crate::display::{BrightnessError, DisplayDevice, DisplayService};

    /// Stand-in service that reports the platform as unsupported.
    pub struct Unsupported;

    /// No display can exist on an unsupported platform.
    pub enum NoDisplay {}

    impl DisplayDevice for NoDisplay {
        fn name(&self) -> Option<String> {
            match *self {}
        }

        fn brightness(&self) -> Result<f32, BrightnessError> {
            match *self {}
        }

        fn set_brightness(&self, _value: f32) -> Result<(), BrightnessError> {
            match *self {}
        }
    }

    impl DisplayService for Unsupported {
        type Device = NoDisplay;
        type Devices = std::iter::Empty<NoDisplay>;

        fn displays(&self) -> Result<Self::Devices, BrightnessError> {
            Err(BrightnessError::Unsupported)
        }
    }

}
