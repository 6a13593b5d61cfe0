//! CLI crate for the sortlab demonstration tool.
//!
//! The binary wires the core pipeline to the terminal: parse arguments,
//! generate seeded data, run one strategy, render the listing. The
//! exporter serializes a finished trace for outside tooling.

pub mod exporter;
