//! Sort strategy identifiers.

use crate::error::SortLabError;

/// Strategy identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyId {
    /// O(n²) selection sort, one traced snapshot per pass
    Selection,

    /// Recursive partition-exchange sort, traced per partition step
    Partition,
}

impl StrategyId {
    /// Returns a list of all strategies.
    pub fn all() -> Vec<StrategyId> {
        vec![StrategyId::Selection, StrategyId::Partition]
    }

    /// Returns the strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyId::Selection => "selection",
            StrategyId::Partition => "partition",
        }
    }

    /// Returns a description of the strategy.
    pub fn description(&self) -> &'static str {
        match self {
            StrategyId::Selection => "swap the minimum of the remaining suffix into each position",
            StrategyId::Partition => "recursively partition around a pivot taken from the range end",
        }
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StrategyId {
    type Err = SortLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selection" | "select" => Ok(StrategyId::Selection),
            "partition" | "quicksort" | "quick" => Ok(StrategyId::Partition),
            _ => Err(SortLabError::unknown_strategy(s)),
        }
    }
}
