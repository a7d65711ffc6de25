use std::io;
use std::process::ExitCode;

use clap::Parser;
use homing_cli::{Args, CliError, execute, log_level};
use homing_engine::logging::ChannelLogger;

#[cfg(feature = "memory_profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn run(args: &Args) -> Result<(), CliError> {
    let logs = ChannelLogger::install(log_level(args))?;
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    execute(args, &logs, &mut out, &mut err)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
