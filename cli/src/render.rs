//! Plain-text report rendering.

use std::io::{self, Write};

use homing_bench::ExperimentReport;

/// Write the full report of a single experiment.
pub fn write_report(out: &mut impl Write, report: &ExperimentReport) -> io::Result<()> {
    writeln!(out, "{report}")
}

/// Column headings for [`write_matrix_row`].
pub fn write_matrix_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<6} {:<13} {:>6} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "layout", "loop", "ordering", "stride", "lowest", "highest", "median", "mean", "std dev"
    )
}

/// One line per matrix combination, timings in nanoseconds.
pub fn write_matrix_row(out: &mut impl Write, report: &ExperimentReport) -> io::Result<()> {
    let stats = &report.stats;
    writeln!(
        out,
        "{:<24} {:<6} {:<13} {:>6} {:>10} {:>10} {:>10} {:>10} {:>12.3}",
        report.layout.name(),
        report.plan.loop_strategy.name(),
        report.plan.write_ordering.name(),
        report.missile_stride,
        stats.min,
        stats.max,
        stats.median,
        stats.mean,
        stats.std_dev
    )
}
