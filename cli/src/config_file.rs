//! TOML experiment files.
//!
//! Any subset of the experiment settings may be given; missing keys keep their
//! defaults.
//!
//! ```toml
//! layout = "decoupled-pointer-array"
//! loop_strategy = "split"
//! write_ordering = "write-at-end"
//! repetitions = 20000
//! warmup_ticks = 100
//! time_step = 0.03
//!
//! [scenario]
//! plane_count = 1000
//! missile_count = 5000
//! position_range = { start = -1000.0, end = 1000.0 }
//! speed_range = { start = 0.0, end = 10.0 }
//! seed = 5489
//! ```

use std::fs;
use std::path::Path;

use homing_bench::ExperimentConfig;

use crate::error::CliError;

/// Read and parse the experiment file at `path`.
pub fn load(path: &Path) -> Result<ExperimentConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(text: &str) -> Result<ExperimentConfig, toml::de::Error> {
    toml::from_str(text)
}
