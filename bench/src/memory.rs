//! Heap accounting for swarm construction, using dhat.
//!
//! Profiling adds overhead and is only active with the `memory_profiling` feature.
//! The binary that enables it must also install `dhat::Alloc` as its global
//! allocator:
//!
//! ```bash
//! cargo run --release -p homing --features memory_profiling -- --matrix
//! ```
//!
//! Without the feature every measurement reports zeros.

/// Allocation figures captured around a closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Total bytes allocated during the measurement.
    pub bytes_allocated: u64,
    /// Total number of allocations.
    pub allocation_count: u64,
    /// Peak heap usage in bytes.
    pub peak_bytes: u64,
}

impl MemoryStats {
    /// Heap bytes per missile for a swarm of `missile_count`.
    pub fn bytes_per_missile(&self, missile_count: usize) -> f64 {
        if missile_count == 0 {
            0.0
        } else {
            self.bytes_allocated as f64 / missile_count as f64
        }
    }

    /// Whether anything was measured at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "allocated: {} bytes ({} allocs), peak: {} bytes",
            self.bytes_allocated, self.allocation_count, self.peak_bytes
        )
    }
}

/// Guard that captures heap statistics between `start` and `finish`.
#[cfg(feature = "memory_profiling")]
pub struct MemoryProfiler {
    _profiler: dhat::Profiler,
}

#[cfg(feature = "memory_profiling")]
impl MemoryProfiler {
    /// Start memory profiling. Only one profiler may be active at a time.
    ///
    /// The detailed heap profile is written to `dhat-heap.json` when it finishes.
    pub fn start() -> Self {
        Self {
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    /// Finish profiling and get statistics.
    pub fn finish(self) -> MemoryStats {
        let stats = dhat::HeapStats::get();
        MemoryStats {
            bytes_allocated: stats.total_bytes,
            allocation_count: stats.total_blocks,
            peak_bytes: stats.max_bytes as u64,
        }
    }
}

#[cfg(not(feature = "memory_profiling"))]
pub struct MemoryProfiler;

#[cfg(not(feature = "memory_profiling"))]
impl MemoryProfiler {
    /// No-op when memory profiling is disabled.
    pub fn start() -> Self {
        Self
    }

    /// Returns empty stats when memory profiling is disabled.
    pub fn finish(self) -> MemoryStats {
        MemoryStats::default()
    }
}

/// Measure heap usage of a closure.
pub fn measure_memory<F, R>(f: F) -> (R, MemoryStats)
where
    F: FnOnce() -> R,
{
    let profiler = MemoryProfiler::start();
    let result = f();
    let stats = profiler.finish();
    (result, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stats_display() {
        let stats = MemoryStats {
            bytes_allocated: 24_000,
            allocation_count: 2,
            peak_bytes: 24_000,
        };
        let display = format!("{}", stats);
        assert!(display.contains("24000 bytes"));
        assert!(display.contains("2 allocs"));
        assert!(display.contains("peak: 24000"));
    }

    #[test]
    fn bytes_per_missile_calculation() {
        let stats = MemoryStats {
            bytes_allocated: 32_000,
            allocation_count: 1,
            peak_bytes: 32_000,
        };
        assert!((stats.bytes_per_missile(1_000) - 32.0).abs() < f64::EPSILON);
        assert_eq!(stats.bytes_per_missile(0), 0.0);
        assert!(!stats.is_empty());
        assert!(MemoryStats::default().is_empty());
    }

    #[cfg(not(feature = "memory_profiling"))]
    #[test]
    fn measure_memory_passes_result_through() {
        let (len, stats) = measure_memory(|| vec![0u8; 64].len());
        assert_eq!(len, 64);
        assert!(stats.is_empty());
    }
}
