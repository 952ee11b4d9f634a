//! Presentation of simulation results.
//!
//! This crate turns the scenarios returned by the calculation service into
//! view state:
//! - Ranked summary with relative fill ratios
//! - Comparison table rows
//! - Multi-series evolution chart aligned on a shared month axis
//! - Detail cards for single-investment comparisons

/// Prelude module for convenient imports.
pub mod prelude;

/// Evolution chart data, colours, labels and the chart slot.
pub mod chart;
/// Detail cards for single results.
pub mod detail;
/// Error types.
pub mod error;
/// Result ranking and summary.
pub mod ranking;
/// Comparison table.
pub mod table;

pub use error::ChartError;
