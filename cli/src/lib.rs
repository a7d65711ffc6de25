//! Command-line front end for the homing layout benchmark.

pub mod args;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod log_drain;
pub mod render;

pub use args::Args;
pub use cli::{execute, log_level};
pub use error::CliError;
