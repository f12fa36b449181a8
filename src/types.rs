/// Shared serializable output types.
///
/// These are what the structured formats (table, JSON) render. The plain format
/// streams the same facts line by line while displays are processed.
use serde::{Deserialize, Serialize};

use crate::display::BrightnessError;

/// What happened to one display during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayReport {
    /// Resolved product name, or null when the metadata was unavailable.
    pub name: Option<String>,
    /// Brightness read before any change, or null when the read failed.
    pub brightness: Option<f32>,
    /// Brightness written, when a set was requested and succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_to: Option<f32>,
    /// Error message when the set failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DisplayReport {
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            brightness: None,
            set_to: None,
            error: None,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Raw platform return code, when a platform call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_code: Option<u32>,
}

impl ErrorOutput {
    /// Construct from a `BrightnessError`.
    #[must_use]
    pub fn from_brightness_error(err: &BrightnessError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                platform_code: err.platform_code().map(|c| c.unsigned()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iokit::ReturnCode;

    #[test]
    fn test_report_skips_absent_set_fields() {
        let mut report = DisplayReport::new(Some("Color LCD".to_owned()));
        report.brightness = Some(0.5);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"name":"Color LCD","brightness":0.5}"#);
    }

    #[test]
    fn test_report_keeps_null_name() {
        let report = DisplayReport::new(None);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"name":null,"brightness":null}"#);
    }

    #[test]
    fn test_error_envelope() {
        let err = BrightnessError::Enumerate {
            code: ReturnCode(-536_870_212),
        };
        let out = ErrorOutput::from_brightness_error(&err);
        assert!(!out.ok);
        assert_eq!(out.error.code, "enumerate_failed");
        assert_eq!(out.error.platform_code, Some(3_758_097_084));
    }
}
