use std::path::PathBuf;

use clap::Parser;
use homing_bench::ExperimentConfig;
use homing_engine::strategy::{LayoutStrategy, LoopStrategy, WriteOrdering};

use crate::config_file;
use crate::error::CliError;

/// Time how target layout and loop structure affect a homing-missile update tick.
///
/// Values come from the defaults, then the `--config` file, then the flags below.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "homing", version)]
pub struct Args {
    /// TOML file with experiment settings.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run every layout, loop strategy and write ordering instead of a single experiment.
    #[arg(long)]
    pub matrix: bool,

    /// Log debug records as well.
    #[arg(short, long)]
    pub verbose: bool,

    /// embedded-value, embedded-pointer or decoupled-pointer-array.
    #[arg(long)]
    pub layout: Option<LayoutStrategy>,

    /// fused or split.
    #[arg(long)]
    pub loop_strategy: Option<LoopStrategy>,

    /// immediate or write-at-end.
    #[arg(long)]
    pub write_ordering: Option<WriteOrdering>,

    #[arg(long)]
    pub planes: Option<usize>,

    #[arg(long)]
    pub missiles: Option<usize>,

    /// Number of timed ticks.
    #[arg(short = 'n', long)]
    pub repetitions: Option<usize>,

    /// Untimed ticks before measuring.
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Simulated seconds per tick.
    #[arg(long)]
    pub time_step: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub position_min: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub position_max: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub speed_min: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    pub speed_max: Option<f32>,

    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Build the experiment configuration, reading the config file if one was given.
    pub fn resolve(&self) -> Result<ExperimentConfig, CliError> {
        let base = match &self.config {
            Some(path) => config_file::load(path)?,
            None => ExperimentConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay every flag that was passed onto `config`.
    pub fn apply(&self, mut config: ExperimentConfig) -> ExperimentConfig {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut config.layout, self.layout);
        set(&mut config.loop_strategy, self.loop_strategy);
        set(&mut config.write_ordering, self.write_ordering);
        set(&mut config.repetitions, self.repetitions);
        set(&mut config.warmup_ticks, self.warmup);
        set(&mut config.time_step, self.time_step);

        let scenario = &mut config.scenario;
        set(&mut scenario.plane_count, self.planes);
        set(&mut scenario.missile_count, self.missiles);
        set(&mut scenario.position_range.start, self.position_min);
        set(&mut scenario.position_range.end, self.position_max);
        set(&mut scenario.speed_range.start, self.speed_min);
        set(&mut scenario.speed_range.end, self.speed_max);
        set(&mut scenario.seed, self.seed);

        config
    }
}
