//! Experiment runner.
//!
//! An experiment fixes one point of the (layout × loop × ordering) matrix, builds
//! the swarm, times `repetitions` ticks and reduces the samples. Everything runs on
//! the calling thread, one tick after another.

use std::fmt;

use homing_engine::scenario::{Scenario, ScenarioConfig, ScenarioError};
use homing_engine::strategy::{LayoutStrategy, LoopStrategy, TickPlan, WriteOrdering};
use homing_engine::{Vector, build_swarm};
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::memory::{MemoryStats, measure_memory};
use crate::stats::{EmptySamples, TickStats};
use crate::tick_timer::measure_ticks;

/// Everything needed to run one experiment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub scenario: ScenarioConfig,
    pub layout: LayoutStrategy,
    pub loop_strategy: LoopStrategy,
    pub write_ordering: WriteOrdering,
    /// Number of timed ticks.
    pub repetitions: usize,
    /// Untimed ticks run before measuring. They still advance the swarm.
    pub warmup_ticks: usize,
    /// Simulated seconds per tick.
    pub time_step: f32,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioConfig::default(),
            layout: LayoutStrategy::EmbeddedPointer,
            loop_strategy: LoopStrategy::Split,
            write_ordering: WriteOrdering::WriteAtEnd,
            repetitions: 100_000,
            warmup_ticks: 0,
            time_step: 0.03,
        }
    }
}

impl ExperimentConfig {
    pub fn plan(&self) -> TickPlan {
        TickPlan::new(self.loop_strategy, self.write_ordering)
    }

    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.scenario.validate()?;
        if self.repetitions == 0 {
            return Err(ExperimentError::NoRepetitions);
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ExperimentError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("repetitions must be at least 1")]
    NoRepetitions,
    #[error("time_step must be a positive, finite number of seconds (got {0})")]
    InvalidTimeStep(f32),
    #[error(transparent)]
    Stats(#[from] EmptySamples),
}

/// Outcome of one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub layout: LayoutStrategy,
    pub plan: TickPlan,
    pub missile_count: usize,
    /// Bytes per missile in the swarm's primary array.
    pub missile_stride: usize,
    /// Heap usage of building the swarm (zeros unless `memory_profiling` is on).
    pub memory: MemoryStats,
    /// Sum of missile positions after the last tick.
    pub checksum: Vector,
    pub stats: TickStats,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "layout: {}", self.layout)?;
        writeln!(f, "loop: {}", self.plan.loop_strategy)?;
        writeln!(f, "write ordering: {}", self.plan.write_ordering)?;
        writeln!(
            f,
            "missiles: {} ({} bytes each)",
            self.missile_count, self.missile_stride
        )?;
        if !self.memory.is_empty() {
            writeln!(
                f,
                "memory: {} ({:.1} bytes per missile)",
                self.memory,
                self.memory.bytes_per_missile(self.missile_count)
            )?;
        }
        write!(f, "{}", self.stats)
    }
}

/// Run the single experiment described by `config`.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;
    let scenario = Scenario::generate(&config.scenario)?;
    run_on(&scenario, config.layout, config.plan(), config)
}

/// Run every layout, loop strategy and write ordering against one shared scenario.
///
/// The layout, loop and ordering fields of `config` are ignored. Each combination
/// gets a fresh swarm, so no experiment inherits state from another.
pub fn run_matrix(config: &ExperimentConfig) -> Result<Vec<ExperimentReport>, ExperimentError> {
    run_matrix_with(config, |_| {})
}

/// [`run_matrix`], calling `observe` after each combination finishes and before the
/// next one starts.
pub fn run_matrix_with<F>(
    config: &ExperimentConfig,
    mut observe: F,
) -> Result<Vec<ExperimentReport>, ExperimentError>
where
    F: FnMut(&ExperimentReport),
{
    config.validate()?;
    let scenario = Scenario::generate(&config.scenario)?;

    let mut reports = Vec::with_capacity(LayoutStrategy::ALL.len() * 4);
    for layout in LayoutStrategy::ALL {
        for plan in TickPlan::all() {
            let report = run_on(&scenario, layout, plan, config)?;
            observe(&report);
            reports.push(report);
        }
    }
    Ok(reports)
}

/// Time `config.repetitions` ticks of a fresh `layout` swarm built from `scenario`.
pub fn run_on(
    scenario: &Scenario,
    layout: LayoutStrategy,
    plan: TickPlan,
    config: &ExperimentConfig,
) -> Result<ExperimentReport, ExperimentError> {
    if config.repetitions == 0 {
        return Err(ExperimentError::NoRepetitions);
    }
    let time_step = config.time_step;
    let (mut swarm, memory) = measure_memory(|| build_swarm(layout, scenario));

    info!(
        "running {layout} {plan}: {} ticks over {} missiles",
        config.repetitions,
        swarm.len()
    );
    if config.warmup_ticks > 0 {
        debug!("warming up with {} untimed ticks", config.warmup_ticks);
        for _ in 0..config.warmup_ticks {
            swarm.tick(time_step, plan);
        }
    }

    let samples = measure_ticks(config.repetitions, |_| swarm.tick(time_step, plan));
    let stats = TickStats::from_samples(&samples)?;
    info!(
        "finished {layout} {plan}: median {}ns, mean {}ns",
        stats.median, stats.mean
    );

    Ok(ExperimentReport {
        layout,
        plan,
        missile_count: swarm.len(),
        missile_stride: swarm.missile_stride(),
        memory,
        checksum: swarm.checksum(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> ExperimentConfig {
        ExperimentConfig {
            scenario: ScenarioConfig {
                plane_count: 20,
                missile_count: 100,
                ..Default::default()
            },
            repetitions: 25,
            ..Default::default()
        }
    }

    #[test]
    fn run_collects_requested_samples() {
        let report = run(&quick_config()).unwrap();
        assert_eq!(report.stats.sample_count, 25);
        assert_eq!(report.missile_count, 100);
        assert_eq!(report.layout, LayoutStrategy::EmbeddedPointer);
        assert_eq!(report.plan, TickPlan::new(LoopStrategy::Split, WriteOrdering::WriteAtEnd));
        assert!(report.stats.min <= report.stats.median);
        assert!(report.stats.median <= report.stats.max);
    }

    #[test]
    fn same_config_same_final_state() {
        let a = run(&quick_config()).unwrap();
        let b = run(&quick_config()).unwrap();
        assert_eq!(a.checksum, b.checksum);
    }

    #[test]
    fn warmup_advances_state() {
        let cold = run(&quick_config()).unwrap();
        let warm = run(&ExperimentConfig {
            warmup_ticks: 5,
            ..quick_config()
        })
        .unwrap();
        assert_ne!(cold.checksum, warm.checksum);
        assert_eq!(warm.stats.sample_count, 25);
    }

    #[test]
    fn matrix_covers_every_combination() {
        let reports = run_matrix(&ExperimentConfig {
            repetitions: 3,
            ..quick_config()
        })
        .unwrap();
        assert_eq!(reports.len(), 12);
        for layout in LayoutStrategy::ALL {
            for plan in TickPlan::all() {
                assert!(reports.iter().any(|r| r.layout == layout && r.plan == plan));
            }
        }
    }

    #[test]
    fn matrix_combinations_end_in_same_state() {
        let reports = run_matrix(&ExperimentConfig {
            repetitions: 10,
            ..quick_config()
        })
        .unwrap();
        let reference = reports[0].checksum;
        assert!(reports.iter().all(|r| r.checksum == reference));
    }

    #[test]
    fn matrix_observer_sees_reports_in_order() {
        let mut seen = Vec::new();
        let reports = run_matrix_with(
            &ExperimentConfig {
                repetitions: 2,
                ..quick_config()
            },
            |report| seen.push((report.layout, report.plan)),
        )
        .unwrap();
        let expected: Vec<_> = reports.iter().map(|r| (r.layout, r.plan)).collect();
        assert_eq!(seen, expected);
        assert_eq!(seen[0].0, LayoutStrategy::EmbeddedValue);
    }

    #[test]
    fn refuses_zero_repetitions() {
        let config = ExperimentConfig {
            repetitions: 0,
            ..quick_config()
        };
        assert_eq!(run(&config), Err(ExperimentError::NoRepetitions));
    }

    #[test]
    fn refuses_zero_missiles() {
        let mut config = quick_config();
        config.scenario.missile_count = 0;
        assert_eq!(
            run(&config),
            Err(ExperimentError::Scenario(ScenarioError::NoMissiles))
        );
    }

    #[test]
    fn refuses_bad_time_step() {
        for time_step in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let config = ExperimentConfig {
                time_step,
                ..quick_config()
            };
            assert!(matches!(
                config.validate(),
                Err(ExperimentError::InvalidTimeStep(_))
            ));
        }
    }

    #[test]
    fn report_shows_memory_per_missile_when_measured() {
        let mut report = run(&quick_config()).unwrap();
        report.memory = MemoryStats {
            bytes_allocated: 3_600,
            allocation_count: 1,
            peak_bytes: 3_600,
        };
        let text = report.to_string();
        assert!(text.contains("\nmemory: allocated: 3600 bytes (1 allocs)"), "{text}");
        assert!(text.contains("peak: 3600 bytes (36.0 bytes per missile)\n"), "{text}");
    }

    #[test]
    fn report_lists_configuration_then_stats() {
        let report = run(&quick_config()).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("layout: embedded-pointer\nloop: split\n"));
        assert!(text.contains("missiles: 100 ("));
        assert!(text.contains("\nlowest: "));
        assert!(text.ends_with("ns"));
    }
}
