//! Core library for the sortlab demonstration tool.
//!
//! Generates a seeded random sequence of bounded integers and sorts a copy
//! of it with one of two traced strategies, recording a snapshot of the
//! working sequence at configurable progress intervals. The point is to
//! make each algorithm's mechanics observable, not to sort fast.
//!
//! # Pipeline
//!
//! ```text
//! DataSource ───► SortRunner ───► SortOutcome
//!  (seeded rng)   (one strategy)   { sorted, snapshots, metrics }
//!                                          │
//!                                          ▼
//!                                    format_block ───► stdout
//! ```
//!
//! Strategies never print. They append [`TraceSnapshot`] records to the
//! outcome and the driver renders them, so each strategy is testable
//! without capturing stdout.
//!
//! # Determinism
//!
//! All randomness comes from a single ChaCha8 stream seeded once at
//! construction. Two runs with the same seed, size, strategy, and interval
//! produce identical data and an identical snapshot sequence.

mod error;
mod format;
mod runner;
mod source;
mod strategy;
mod trace;

pub use error::SortLabError;
pub use format::{format_block, ORIGINAL_LINE_WIDTH, TRACE_LINE_WIDTH};
pub use runner::{SortMetrics, SortOutcome, SortRunner};
pub use source::{DataSource, DEFAULT_SEED, MAX_VALUE};
pub use strategy::StrategyId;
pub use trace::{TraceLabel, TraceSnapshot};
