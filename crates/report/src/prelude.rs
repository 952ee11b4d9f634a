//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use rendafixa_report::prelude::*;
//! ```

// Ranking
pub use crate::ranking::{RankedScenario, Summary, rank, summarize};

// Table
pub use crate::table::{TABLE_HEADERS, TableRow, table_rows, to_pretty_table};

// Chart
pub use crate::chart::labels::{axis_labels, month_label};
pub use crate::chart::palette::{PALETTE, SeriesColor, series_color};
pub use crate::chart::slot::{ChartSlot, ChartTarget};
pub use crate::chart::{ChartData, ChartSeries, build_chart};

// Detail
pub use crate::detail::{DetailCard, detail_card};

// Errors
pub use crate::error::ChartError;
