/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser, ValueEnum};

/// brightness: list displays and read or set their brightness.
#[derive(Debug, Parser)]
#[command(
    name = "brightness",
    about = "List displays and read or set their brightness",
    override_usage = "brightness [-d name_of_display] [-s] [brightness_to_set]",
    after_help = AFTER_HELP,
    version,
    disable_help_flag = true,
    allow_negative_numbers = true,
    args_override_self = true
)]
pub struct Cli {
    /// Only act on the display with exactly this name.
    #[arg(
        short = 'd',
        short_alias = 'm',
        value_name = "name_of_display",
        allow_hyphen_values = true
    )]
    pub display: Option<String>,

    /// Silence non-error output.
    #[arg(short = 's', short_alias = 'q')]
    pub silent: bool,

    /// Print this help and exit.
    #[arg(short = 'h', short_alias = '?', action = ArgAction::Help)]
    #[allow(dead_code)]
    pub help: Option<bool>,

    /// Brightness to set, usually 0.0 (min) to 1.0 (max).
    #[arg(value_name = "brightness_to_set", value_parser = parse_brightness)]
    pub brightness: Option<f32>,

    /// Report format. `plain` streams one line per display.
    #[arg(long, value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Print display service call timing to stderr.
    #[arg(long)]
    pub debug: bool,
}

const AFTER_HELP: &str = "\
- brightness range is from 0.0 (min) to 1.0 (max) on most displays,
  but other values are passed through unchanged
- all applicable displays are set unless a single one is
  named with the -d option
- names of displays and their current brightnesses
  are printed if no arguments are given
- the option -s silences non-error output";

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One line per display, written as each display is processed.
    #[default]
    Plain,
    /// Human-readable table, rendered after all displays are processed.
    Table,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Invocation options, fully parsed before any display is touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Suppress all non-error output.
    pub quiet: bool,
    /// Exact display name to act on.
    pub display: Option<String>,
    /// Brightness to write, if any.
    pub brightness: Option<f32>,
}

impl Cli {
    /// The invocation options carried by these arguments.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            quiet: self.silent,
            display: self.display.clone(),
            brightness: self.brightness,
        }
    }
}

/// Parse a brightness token. Any finite `f32` is accepted.
fn parse_brightness(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}
