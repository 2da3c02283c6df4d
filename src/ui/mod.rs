//! Console rendering of tables and analysis results.

pub mod report;
pub mod table;

/// Fixed cell width used by the row previews.
pub const CELL_WIDTH: usize = 15;
