use std::io;
use std::path::PathBuf;

use homing_bench::ExperimentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read config file {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Experiment(#[from] ExperimentError),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
