//! Trace snapshots emitted while sorting.
//!
//! Strategies record the working sequence instead of printing it; the
//! driver renders the records once the run is over. Each snapshot carries
//! a label identifying the algorithm state it was taken in.

use std::fmt;

/// Identifies the algorithm state a snapshot was taken in.
///
/// Depth values are diagnostic labels for the recursion level and never
/// feed back into a sorting decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLabel {
    /// Selection sort finished the pass for position `pass`
    SelectionPass { pass: usize },

    /// Partition recursion reached a one-element range
    OneElement { depth: usize },

    /// Partition recursion ordered a two-element range
    TwoElement { start: usize, end: usize, depth: usize },

    /// One cursor step of a partition over the range `[start, end]`
    PartitionStep { start: usize, end: usize, depth: usize },
}

impl fmt::Display for TraceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLabel::SelectionPass { pass } => {
                write!(f, "Pass {}. Array at this point:", pass)
            }
            TraceLabel::OneElement { depth } => {
                write!(f, "1 element to sort, depth = {}. Array at this point:", depth)
            }
            TraceLabel::TwoElement { start, end, depth } => {
                write!(
                    f,
                    "2-element range: {} to {}, depth = {}. Array at this point:",
                    start, end, depth
                )
            }
            TraceLabel::PartitionStep { start, end, depth } => {
                write!(
                    f,
                    "Range: {} to {}. Depth = {}. Array at this point:",
                    start, end, depth
                )
            }
        }
    }
}

/// A point-in-time copy of the working sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSnapshot {
    /// Algorithm state the snapshot was taken in
    pub label: TraceLabel,

    /// The whole working sequence at emission time
    pub values: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_wording() {
        assert_eq!(
            TraceLabel::SelectionPass { pass: 3 }.to_string(),
            "Pass 3. Array at this point:"
        );
        assert_eq!(
            TraceLabel::OneElement { depth: 2 }.to_string(),
            "1 element to sort, depth = 2. Array at this point:"
        );
        assert_eq!(
            TraceLabel::TwoElement { start: 0, end: 1, depth: 4 }.to_string(),
            "2-element range: 0 to 1, depth = 4. Array at this point:"
        );
        assert_eq!(
            TraceLabel::PartitionStep { start: 2, end: 7, depth: 1 }.to_string(),
            "Range: 2 to 7. Depth = 1. Array at this point:"
        );
    }
}
