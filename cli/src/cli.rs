//! Command-line front end.
//!
//! Resolves the configuration, runs the experiment (or the matrix) and writes the
//! report to `out`. Queued log records are written to `err` only between
//! experiments, so nothing touches the terminal while ticks are being timed.

use std::io::Write;

use crossbeam::channel::Receiver;
use homing_bench::experiment::{run, run_matrix_with};
use homing_engine::logging::LogMessage;
use log::LevelFilter;

use crate::args::Args;
use crate::error::CliError;
use crate::{log_drain, render};

/// Log level the front end asks for.
pub fn log_level(args: &Args) -> LevelFilter {
    if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn execute(
    args: &Args,
    logs: &Receiver<LogMessage>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let config = args.resolve()?;

    if args.matrix {
        config.validate()?;
        render::write_matrix_header(out)?;
        let mut io_result = Ok(());
        let result = run_matrix_with(&config, |report| {
            if io_result.is_ok() {
                io_result = log_drain::drain(logs, err)
                    .and_then(|_| render::write_matrix_row(out, report))
                    .and_then(|_| out.flush());
            }
        });
        log_drain::drain(logs, err)?;
        result?;
        io_result?;
    } else {
        let result = run(&config);
        log_drain::drain(logs, err)?;
        render::write_report(out, &result?)?;
    }
    Ok(())
}
