//! Benchmark harness for the homing layout experiment.
//!
//! This crate turns the swarms of `homing_engine` into measurements:
//!
//! - **Tick timing**: one monotonic-clock sample per full update tick
//! - **Statistics**: min, max, median, mean and standard deviation in nanoseconds
//! - **Memory tracking**: heap allocation profiling via dhat
//! - **Experiments**: a single configured run, or the full layout × loop × ordering matrix
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Criterion comparison of every layout and loop strategy
//! cargo bench -p homing_bench
//!
//! # Run specific benchmark group
//! cargo bench -p homing_bench -- tick/decoupled
//! ```
//!
//! Criterion results are written to `target/criterion/` with HTML reports.

pub mod experiment;
pub mod memory;
pub mod stats;
pub mod tick_timer;

pub use experiment::{
    ExperimentConfig, ExperimentError, ExperimentReport, run, run_matrix, run_matrix_with,
};
pub use stats::TickStats;
