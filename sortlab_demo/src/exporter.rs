//! JSON exporter for sort traces.
//!
//! Writes the full snapshot sequence of one run as JSON so a trace can be
//! inspected or replayed by other tooling.

use serde::{Deserialize, Serialize};
use sortlab_core::{SortMetrics, SortOutcome, TraceSnapshot};
use std::fs::File;
use std::io::Write;

/// A single traced state of the working sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Label line identifying the algorithm state
    pub label: String,

    /// Working sequence at emission time
    pub values: Vec<u32>,
}

impl TraceFrame {
    pub fn new(snapshot: &TraceSnapshot) -> Self {
        Self {
            label: snapshot.label.to_string(),
            values: snapshot.values.clone(),
        }
    }
}

/// Counters of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetrics {
    pub comparisons: u64,
    pub swaps: u64,
    pub snapshots: u64,
    pub max_depth: usize,
}

impl From<SortMetrics> for ExportMetrics {
    fn from(metrics: SortMetrics) -> Self {
        Self {
            comparisons: metrics.comparisons,
            swaps: metrics.swaps,
            snapshots: metrics.snapshots,
            max_depth: metrics.max_depth,
        }
    }
}

/// Complete trace export for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceExport {
    /// Strategy name
    pub strategy: String,

    /// Seed used
    pub seed: u64,

    /// Requested element count
    pub size: usize,

    /// Progress interval
    pub interval: usize,

    /// Original (unsorted) sequence
    pub original: Vec<u32>,

    /// All snapshots in emission order
    pub frames: Vec<TraceFrame>,

    /// Final sorted sequence
    pub sorted: Vec<u32>,

    /// Counters collected during the run
    pub metrics: ExportMetrics,
}

impl TraceExport {
    /// Builds an export from one finished run.
    pub fn new(outcome: &SortOutcome, original: &[u32], seed: u64, interval: usize) -> Self {
        Self {
            strategy: outcome.strategy.name().to_string(),
            seed,
            size: original.len(),
            interval,
            original: original.to_vec(),
            frames: outcome.snapshots.iter().map(TraceFrame::new).collect(),
            sorted: outcome.sorted.clone(),
            metrics: outcome.metrics.into(),
        }
    }

    /// Writes the export to a pretty-printed JSON file.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortlab_core::{SortRunner, StrategyId};

    #[test]
    fn test_export_mirrors_outcome() {
        let original = vec![5, 3, 8, 1, 2];
        let outcome = SortRunner::new().run(StrategyId::Selection, &original);
        let export = TraceExport::new(&outcome, &original, 42, 1);

        assert_eq!(export.strategy, "selection");
        assert_eq!(export.seed, 42);
        assert_eq!(export.size, 5);
        assert_eq!(export.frames.len(), outcome.snapshots.len());
        assert_eq!(export.frames[0].label, "Pass 0. Array at this point:");
        assert_eq!(export.sorted, vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_export_serializes_in_order() {
        let original = vec![3, 1, 2];
        let outcome = SortRunner::new().run(StrategyId::Partition, &original);
        let export = TraceExport::new(&outcome, &original, 7, 1);

        let json = serde_json::to_string(&export).unwrap();
        let parsed: TraceExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.frames.len(), export.frames.len());
        for (a, b) in parsed.frames.iter().zip(export.frames.iter()) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.values, b.values);
        }
    }
}
