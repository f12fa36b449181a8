/// Output formatting: the streaming plain line format, table and JSON reports, errors.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use crate::display::BrightnessError;
use crate::types::{DisplayReport, ErrorOutput};

/// Minimum width of the name column, not counting the quotes.
pub const NAME_WIDTH: usize = 20;

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the processor and formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, nothing is written to stdout.
    pub quiet: bool,
    /// When true, print display service timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, quiet: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            quiet,
            debug,
        }
    }

    /// Whether display lines are written while displays are processed.
    #[must_use]
    pub fn streams_lines(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Plain
    }

    /// Whether collected reports are rendered after processing.
    #[must_use]
    pub fn renders_reports(&self) -> bool {
        !self.quiet && self.format != OutputFormat::Plain
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a one-off debug note to stderr when `--debug` is set.
    pub fn debug_note(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }
}

// --- Plain line format ---

/// The quoted name followed by padding up to `width` characters. Never truncates.
///
/// An absent name renders as `''`.
#[must_use]
pub fn name_field(name: Option<&str>, width: usize) -> String {
    let name = name.unwrap_or("");
    let pad = width.saturating_sub(name.chars().count());
    format!("'{name}'{:pad$}", "")
}

/// Write the name column and its separator, then flush so progress shows before
/// the (possibly slow) brightness calls.
pub fn write_name_field<W: Write>(out: &mut W, name: Option<&str>) {
    let _ = write!(out, "{} ", name_field(name, NAME_WIDTH));
    let _ = out.flush();
}

/// Write the current brightness.
pub fn write_brightness<W: Write>(out: &mut W, value: f32) {
    let _ = write!(out, "{value:.3}");
}

/// Write the newly set brightness.
pub fn write_new_brightness<W: Write>(out: &mut W, value: f32) {
    let _ = write!(out, " -> {value:.3}");
}

/// Terminate a display line.
pub fn end_line<W: Write>(out: &mut W) {
    let _ = writeln!(out);
}

/// Report a failed set on `err`. Starts on a fresh line when a display line is open.
pub fn write_set_error<W: Write>(err: &mut W, error: &BrightnessError, line_open: bool) {
    let lead = if line_open { "\n" } else { "" };
    let _ = writeln!(err, "{lead}Error: {error}");
}

// --- Collected reports ---

/// Write collected display reports in a structured format.
///
/// Writes nothing for the plain format.
pub fn write_reports<W: Write>(out: &mut W, reports: &[DisplayReport], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(out, reports),
        OutputFormat::Compact => print_compact_json(out, reports),
        OutputFormat::Ndjson => print_ndjson(out, reports),
        OutputFormat::Table => write_reports_table(out, reports),
        // Written line by line while displays are processed.
        OutputFormat::Plain => {}
    }
}

fn write_reports_table<W: Write>(out: &mut W, reports: &[DisplayReport]) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["NAME", "BRIGHTNESS", "SET"]);
    for report in reports {
        let set = match (&report.set_to, &report.error) {
            (Some(value), _) => format!("{value:.3}"),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        };
        table.add_row([
            report.name.clone().unwrap_or_default(),
            report
                .brightness
                .map(|b| format!("{b:.3}"))
                .unwrap_or_default(),
            set,
        ]);
    }
    let _ = writeln!(out, "{table}");
}

// --- Error output ---

/// Write a top-level error to stderr.
pub fn write_error(err: &BrightnessError, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match ctx.format {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let envelope = ErrorOutput::from_brightness_error(err);
            let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Plain | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {err}");
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            let _ = writeln!(out, "{s}");
        }
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => {
            let _ = writeln!(out, "{s}");
        }
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<W: Write, T: Serialize>(out: &mut W, values: &[T]) {
    for v in values {
        print_compact_json(out, v);
    }
}
