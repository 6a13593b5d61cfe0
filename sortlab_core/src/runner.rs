//! Sort runner: executes one traced sort strategy over a sequence.

use crate::strategy::StrategyId;
use crate::trace::{TraceLabel, TraceSnapshot};
use tracing::debug;

/// Results from running one sort strategy.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    /// Strategy that was run
    pub strategy: StrategyId,

    /// The working sequence, fully sorted
    pub sorted: Vec<u32>,

    /// Snapshots emitted while sorting, in emission order
    pub snapshots: Vec<TraceSnapshot>,

    /// Counters collected during the run
    pub metrics: SortMetrics,
}

/// Counters collected during a sort run.
///
/// Diagnostic only. Nothing here feeds back into the algorithms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortMetrics {
    /// Element comparisons performed
    pub comparisons: u64,

    /// Element swaps performed
    pub swaps: u64,

    /// Snapshots emitted
    pub snapshots: u64,

    /// Deepest recursion level reached (partition strategy only)
    pub max_depth: usize,
}

/// Runs sort strategies with a configurable trace density.
pub struct SortRunner {
    /// Passes/steps between snapshots (1 = every step)
    progress_interval: usize,
}

impl SortRunner {
    /// Creates a runner that snapshots every step.
    pub fn new() -> Self {
        Self {
            progress_interval: 1,
        }
    }

    /// Sets the progress interval. Zero is treated as 1.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Returns the progress interval.
    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    /// Runs `strategy` over a copy of `original` and returns the outcome.
    ///
    /// `original` is never mutated. The working sequence starts as a fresh
    /// copy and is reordered in place; every snapshot and the final result
    /// hold the same multiset of values as `original`.
    pub fn run(&self, strategy: StrategyId, original: &[u32]) -> SortOutcome {
        debug!(
            "Starting {} sort: {} elements, interval={}",
            strategy.name(),
            original.len(),
            self.progress_interval
        );

        let mut working = original.to_vec();
        let mut snapshots = Vec::new();
        let mut metrics = SortMetrics::default();

        match strategy {
            StrategyId::Selection => {
                self.selection(&mut working, &mut snapshots, &mut metrics);
            }
            StrategyId::Partition => {
                if !working.is_empty() {
                    let last = working.len() - 1;
                    self.partition_range(&mut working, 0, last, 0, &mut snapshots, &mut metrics);
                }
            }
        }

        debug!(
            "{} sort done: {} comparisons, {} swaps, {} snapshots",
            strategy.name(),
            metrics.comparisons,
            metrics.swaps,
            metrics.snapshots
        );

        SortOutcome {
            strategy,
            sorted: working,
            snapshots,
            metrics,
        }
    }

    /// True when the gating index is due a snapshot.
    fn due(&self, index: usize) -> bool {
        self.progress_interval == 1 || index % self.progress_interval == 0
    }

    fn emit(
        label: TraceLabel,
        working: &[u32],
        snapshots: &mut Vec<TraceSnapshot>,
        metrics: &mut SortMetrics,
    ) {
        snapshots.push(TraceSnapshot {
            label,
            values: working.to_vec(),
        });
        metrics.snapshots += 1;
    }

    /// Selection sort: for each position, swap in the minimum of the
    /// remaining suffix. Emits one gated snapshot per pass.
    fn selection(
        &self,
        working: &mut [u32],
        snapshots: &mut Vec<TraceSnapshot>,
        metrics: &mut SortMetrics,
    ) {
        for pass in 0..working.len() {
            let mut smallest = pass;
            for probe in pass + 1..working.len() {
                metrics.comparisons += 1;
                if working[probe] < working[smallest] {
                    smallest = probe;
                }
            }

            // An equal minimum stays where it is; only a strictly smaller
            // value earns the swap.
            metrics.comparisons += 1;
            if working[smallest] < working[pass] {
                working.swap(pass, smallest);
                metrics.swaps += 1;
            }

            if self.due(pass) {
                Self::emit(TraceLabel::SelectionPass { pass }, working, snapshots, metrics);
            }
        }
    }

    /// Recursive partition-exchange step over the inclusive range
    /// `[start, end]`.
    ///
    /// `depth` labels snapshots and feeds the `max_depth` counter; it never
    /// drives a sorting decision. The partition is not guaranteed balanced:
    /// already-sorted input degrades to a recursion level per element.
    fn partition_range(
        &self,
        working: &mut [u32],
        start: usize,
        end: usize,
        depth: usize,
        snapshots: &mut Vec<TraceSnapshot>,
        metrics: &mut SortMetrics,
    ) {
        metrics.max_depth = metrics.max_depth.max(depth);

        // One element is already sorted. Always traced.
        if start == end {
            Self::emit(TraceLabel::OneElement { depth }, working, snapshots, metrics);
            return;
        }

        // Two elements: order them directly.
        if end - start == 1 {
            metrics.comparisons += 1;
            if working[end] < working[start] {
                working.swap(start, end);
                metrics.swaps += 1;
            }
            if self.due(depth) {
                Self::emit(
                    TraceLabel::TwoElement { start, end, depth },
                    working,
                    snapshots,
                    metrics,
                );
            }
            return;
        }

        // Three or more elements. The element at `end` takes the hot seat
        // as the pivot.
        let pivot = working[end];
        let mut i = start;
        let mut j = end - 1;

        loop {
            // Scan up for an element greater than the pivot. Values equal
            // to the pivot do not stop the cursor.
            while i < end && working[i] <= pivot {
                metrics.comparisons += 1;
                i += 1;
            }
            // Scan down for an element less than the pivot, never crossing
            // below `i`.
            while j > i && working[j] >= pivot {
                metrics.comparisons += 1;
                j -= 1;
            }

            // At this point either i == end (the pivot is the maximum of
            // the range), or j <= i (both sides fully scanned), or
            // i < j < end and the two elements must trade sides.
            if i < j {
                working.swap(i, j);
                metrics.swaps += 1;
                i += 1;
                j -= 1;
            }

            if self.due(depth + end) {
                Self::emit(
                    TraceLabel::PartitionStep { start, end, depth },
                    working,
                    snapshots,
                    metrics,
                );
            }

            if i >= end || j <= i {
                break;
            }
        }

        if i == end {
            // The pivot already sits above everything else in the range,
            // so it is final. Sort what precedes it.
            self.partition_range(working, start, end - 1, depth + 1, snapshots, metrics);
        } else {
            // Swap the pivot into `i`, its final position, then sort the
            // subranges on either side when they hold two or more elements.
            working[end] = working[i];
            working[i] = pivot;
            metrics.swaps += 1;

            if i > start + 1 {
                self.partition_range(working, start, i - 1, depth + 1, snapshots, metrics);
            }
            if i + 1 < end {
                self.partition_range(working, i + 1, end, depth + 1, snapshots, metrics);
            }
        }
    }
}

impl Default for SortRunner {
    fn default() -> Self {
        Self::new()
    }
}
