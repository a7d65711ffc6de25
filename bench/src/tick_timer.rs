//! Per-tick timing.
//!
//! Every sample brackets exactly one tick between two reads of the monotonic clock
//! (`Instant`) and is stored as whole nanoseconds. Nothing is reset between samples.

use std::time::Instant;

/// Collects one elapsed-nanoseconds sample per tick.
pub struct TickTimer {
    samples: Vec<u64>,
    tick_start: Option<Instant>,
}

impl TickTimer {
    /// Create a new tick timer with pre-allocated capacity.
    pub fn new(expected_ticks: usize) -> Self {
        Self {
            samples: Vec::with_capacity(expected_ticks),
            tick_start: None,
        }
    }

    /// Mark the start of a tick.
    #[inline]
    pub fn begin_tick(&mut self) {
        self.tick_start = Some(Instant::now());
    }

    /// Mark the end of a tick and record its duration.
    #[inline]
    pub fn end_tick(&mut self) {
        if let Some(start) = self.tick_start.take() {
            let nanos = start.elapsed().as_nanos();
            self.samples.push(u64::try_from(nanos).unwrap_or(u64::MAX));
        }
    }

    /// Number of ticks recorded so far.
    pub fn tick_count(&self) -> usize {
        self.samples.len()
    }

    /// Recorded samples in the order they were taken.
    pub fn into_samples(self) -> Vec<u64> {
        self.samples
    }
}

/// Run `tick_fn` `count` times, timing each call.
///
/// `tick_fn` receives the repetition index.
pub fn measure_ticks<F>(count: usize, mut tick_fn: F) -> Vec<u64>
where
    F: FnMut(usize),
{
    let mut timer = TickTimer::new(count);

    for tick in 0..count {
        timer.begin_tick();
        tick_fn(tick);
        timer.end_tick();
    }

    timer.into_samples()
}
