/// Per-display processing: filter, read, optionally write, report.
use std::io::Write;

use super::{BrightnessError, DisplayDevice, DisplayService};
use crate::cli::OutputCtx;
use crate::cli::args::Options;
use crate::cli::output::{
    end_line, write_brightness, write_name_field, write_new_brightness, write_set_error,
};
use crate::types::DisplayReport;

/// Outcome of walking every enumerated display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// One report per display that passed the filter, in enumeration order.
    pub reports: Vec<DisplayReport>,
    /// Number of displays whose brightness was successfully set.
    pub displays_set: usize,
}

/// Whether a display with `name` passes the optional exact-match `filter`.
///
/// A display without a name never matches a filter.
#[must_use]
pub fn matches_filter(filter: Option<&str>, name: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => name == Some(wanted),
    }
}

/// Enumerate displays from `service` and process each one in order.
///
/// In the plain format each display's line is written to `out` as it is
/// processed; set failures go to `err` and do not stop the walk. A failed
/// brightness read only skips that display's value and set.
///
/// # Errors
///
/// Returns the service's enumeration error. Nothing is written to `out` in
/// that case.
pub fn process<S, O, E>(
    service: &S,
    opts: &Options,
    ctx: &OutputCtx,
    out: &mut O,
    err: &mut E,
) -> Result<RunSummary, BrightnessError>
where
    S: DisplayService,
    O: Write,
    E: Write,
{
    let t_enumerate = ctx.timer("enumerate");
    let devices = service.displays()?;
    drop(t_enumerate);

    let mut summary = RunSummary::default();
    for device in devices {
        if let Some(report) = process_one(&device, opts, ctx, out, err) {
            if report.set_to.is_some() {
                summary.displays_set += 1;
            }
            summary.reports.push(report);
        }
    }
    Ok(summary)
}

/// Process one display. Returns `None` when the filter skips it.
fn process_one<D, O, E>(
    device: &D,
    opts: &Options,
    ctx: &OutputCtx,
    out: &mut O,
    err: &mut E,
) -> Option<DisplayReport>
where
    D: DisplayDevice,
    O: Write,
    E: Write,
{
    let t_name = ctx.timer("name");
    let name = device.name();
    drop(t_name);

    if !matches_filter(opts.display.as_deref(), name.as_deref()) {
        return None;
    }

    let streaming = ctx.streams_lines();
    if streaming {
        write_name_field(out, name.as_deref());
    }
    let mut report = DisplayReport::new(name);

    let t_read = ctx.timer("get_brightness");
    let current = device.brightness();
    drop(t_read);

    match current {
        Ok(value) => {
            report.brightness = Some(value);
            if streaming {
                write_brightness(out, value);
            }
            if let Some(target) = opts.brightness {
                let t_write = ctx.timer("set_brightness");
                let written = device.set_brightness(target);
                drop(t_write);
                match written {
                    Ok(()) => {
                        report.set_to = Some(target);
                        if streaming {
                            write_new_brightness(out, target);
                        }
                    }
                    Err(error) => {
                        write_set_error(err, &error, streaming);
                        report.error = Some(error.to_string());
                    }
                }
            }
        }
        Err(error) => ctx.debug_note(&format!("skipping display: {error}")),
    }

    if streaming {
        end_line(out);
    }
    Some(report)
}

/// Decide the run's outcome once every display has been processed.
///
/// # Errors
///
/// When a brightness was requested and no display was set, returns
/// `NoMatchingDisplaysSet` if a filter was active, `NoDisplaysSet` otherwise.
pub fn finish(summary: &RunSummary, opts: &Options) -> Result<(), BrightnessError> {
    if opts.brightness.is_none() || summary.displays_set > 0 {
        return Ok(());
    }
    if opts.display.is_some() {
        Err(BrightnessError::NoMatchingDisplaysSet)
    } else {
        Err(BrightnessError::NoDisplaysSet)
    }
}
