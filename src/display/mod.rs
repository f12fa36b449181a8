/// Display domain layer: the platform seam, per-display processing, result reporting.
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod process;

pub use errors::BrightnessError;
pub use process::{finish, process};

/// One enumerated display. The platform object is released when the value drops.
pub trait DisplayDevice {
    /// Best-effort human-readable name. `None` when the metadata is missing.
    fn name(&self) -> Option<String>;

    /// Read the current brightness parameter.
    ///
    /// # Errors
    ///
    /// Returns `BrightnessError::Read` with the platform code on failure.
    fn brightness(&self) -> Result<f32, BrightnessError>;

    /// Write the brightness parameter. The value is passed through unclamped.
    ///
    /// # Errors
    ///
    /// Returns `BrightnessError::Write` with the platform code on failure.
    fn set_brightness(&self, value: f32) -> Result<(), BrightnessError>;
}

/// A platform service able to enumerate displays.
pub trait DisplayService {
    /// Owned display handle.
    type Device: DisplayDevice;
    /// Forward-only, single-pass sequence of handles.
    type Devices: Iterator<Item = Self::Device>;

    /// Request every display device from the platform.
    ///
    /// # Errors
    ///
    /// Returns `BrightnessError::Enumerate` (or `Unsupported`) when the device
    /// list cannot be obtained. This is fatal for the run.
    fn displays(&self) -> Result<Self::Devices, BrightnessError>;
}
