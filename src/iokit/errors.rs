/// Errors from the macOS IOKit display layer.
use std::fmt;

use thiserror::Error;

/// Raw `IOReturn` code from IOKit calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnCode(pub i32);

/// `kIOReturnSuccess`.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub const IO_RETURN_SUCCESS: ReturnCode = ReturnCode(0);

impl ReturnCode {
    /// IOKit codes are conventionally shown unsigned (`0xE00002C2` is `3758097090`).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn unsigned(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unsigned())
    }
}

/// Typed errors from the IOKit layer.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
#[derive(Debug, Error)]
pub enum IOKitError {
    /// `IOServiceMatching` could not build a matching dictionary.
    #[error("Could not build matching dictionary for '{0}'")]
    NoMatchingDictionary(String),

    /// Generic IOKit failure with the raw return code.
    #[error("IOKit failure (code {code}): {context}")]
    ApiFailure {
        /// Raw `IOReturn` code.
        code: ReturnCode,
        /// Human-readable context for which call failed.
        context: String,
    },
}

impl IOKitError {
    /// The raw return code, if this error carries one.
    #[must_use]
    pub fn code(&self) -> Option<ReturnCode> {
        match self {
            Self::NoMatchingDictionary(_) => None,
            Self::ApiFailure { code, .. } => Some(*code),
        }
    }
}

/// Map a raw `IOReturn` to a `Result`.
///
/// # Errors
///
/// Returns `Err(IOKitError::ApiFailure)` for any non-success code.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub fn check_io_return(code: i32, context: &str) -> Result<(), IOKitError> {
    let code = ReturnCode(code);
    if code == IO_RETURN_SUCCESS {
        return Ok(());
    }
    Err(IOKitError::ApiFailure {
        code,
        context: context.to_owned(),
    })
}
