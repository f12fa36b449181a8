#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! brightness: list displays and read or set their brightness.

mod cli;
mod display;
mod iokit;
mod platform;
mod types;

use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::output::write_reports;
use cli::{Cli, OutputCtx, write_error};
use display::{BrightnessError, finish, process};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(usage(&err)),
    };

    let ctx = OutputCtx::new(cli.output, cli.json, cli.silent, cli.debug);

    if let Err(err) = run(&cli, &ctx) {
        write_error(&err, &ctx);
        std::process::exit(err.exit_code());
    }
}

/// Report a parse outcome that ends the process and return its exit status.
///
/// Help goes to stderr, like every other usage message.
fn usage(err: &clap::Error) -> i32 {
    if err.kind() == ErrorKind::DisplayHelp {
        eprint!("{}", Cli::command().render_help());
    } else {
        let _ = err.print();
    }
    parse_exit_status(err.kind())
}

/// Help and version end the run successfully; anything else is a usage error.
fn parse_exit_status(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 2,
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), BrightnessError> {
    let opts = cli.options();
    let service = platform::service();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut err = std::io::stderr();

    let summary = process(&service, &opts, ctx, &mut out, &mut err)?;
    if ctx.renders_reports() {
        write_reports(&mut out, &summary.reports, ctx);
    }
    let _ = out.flush();

    finish(&summary, &opts)
}
