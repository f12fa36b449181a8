/// Errors from the display domain layer.
use thiserror::Error;

use crate::iokit::{IOKitError, ReturnCode};

/// Errors that can occur while listing or adjusting displays.
#[derive(Debug, Error)]
pub enum BrightnessError {
    /// The platform could not produce the list of displays.
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    #[error("Could not get displays (code {code})")]
    Enumerate {
        /// Raw platform return code.
        code: ReturnCode,
    },

    /// Reading the brightness parameter failed.
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    #[error("Could not read brightness (code {code})")]
    Read {
        /// Raw platform return code.
        code: ReturnCode,
    },

    /// Writing the brightness parameter failed.
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    #[error("Could not set brightness (code {code}).")]
    Write {
        /// Raw platform return code.
        code: ReturnCode,
    },

    /// A value was requested but no display accepted it.
    #[error("No displays could be set")]
    NoDisplaysSet,

    /// A value was requested with `-d` but no matching display accepted it.
    #[error("No matching displays could be set")]
    NoMatchingDisplaysSet,

    /// This build has no display service for the running OS.
    #[error("Display services are only available on macOS")]
    Unsupported,

    /// An underlying IOKit error.
    #[error("Display services error: {0}")]
    IOKit(#[from] IOKitError),
}

impl BrightnessError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Enumerate { .. }
            | Self::Read { .. }
            | Self::Write { .. }
            | Self::NoDisplaysSet
            | Self::NoMatchingDisplaysSet
            | Self::Unsupported
            | Self::IOKit(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Enumerate { .. } => "enumerate_failed",
            Self::Read { .. } => "read_failed",
            Self::Write { .. } => "write_failed",
            Self::NoDisplaysSet => "no_displays_set",
            Self::NoMatchingDisplaysSet => "no_matching_displays_set",
            Self::Unsupported => "unsupported_platform",
            Self::IOKit(_) => "iokit_error",
        }
    }

    /// The raw platform return code, when the failure came from a platform call.
    #[must_use]
    pub fn platform_code(&self) -> Option<ReturnCode> {
        match self {
            Self::Enumerate { code } | Self::Read { code } | Self::Write { code } => Some(*code),
            Self::IOKit(err) => err.code(),
            Self::NoDisplaysSet | Self::NoMatchingDisplaysSet | Self::Unsupported => None,
        }
    }
}
