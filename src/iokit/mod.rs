/// macOS IOKit display layer.
pub mod errors;
#[cfg(target_os = "macos")]
mod graphics;
#[cfg(target_os = "macos")]
mod name;
#[cfg(target_os = "macos")]
pub mod service;

pub use errors::{IOKitError, ReturnCode};
#[cfg(target_os = "macos")]
pub use service::IOKitService;
