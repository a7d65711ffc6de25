//! Prints queued log records to the terminal.

use std::io::{self, Write};

use crossbeam::channel::Receiver;
use crossterm::style::{StyledContent, Stylize};
use homing_engine::logging::LogMessage;
use log::Level;

fn level_label(level: Level) -> StyledContent<&'static str> {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow(),
        Level::Info => "INFO ".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".dark_grey(),
    }
}

/// Write every record currently queued on `receiver`. Never blocks.
/// Returns the number of records written.
pub fn drain(receiver: &Receiver<LogMessage>, out: &mut impl Write) -> io::Result<usize> {
    let mut written = 0;
    for message in receiver.try_iter() {
        writeln!(out, "{} {}", level_label(message.level), message.message)?;
        written += 1;
    }
    Ok(written)
}
