//! Numeric-vs-text column classification.
//!
//! Classification needs every present cell to parse; extraction keeps the
//! cells that parse and silently skips the rest. The two rules differ on
//! purpose and must stay separate.

use super::model::Table;
use crate::error::Result;

/// Parse one cell as a finite `f64`. Residual whitespace is tolerated.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `true` when every present cell of `column` parses. A table without rows
/// is vacuously numeric; cells missing from short rows are not failures.
pub fn is_numeric(table: &Table, column: i64) -> Result<bool> {
    let column = table.check_column(column)?;
    Ok(is_numeric_at(table, column))
}

/// Numeric values of `column` in row order, skipping cells that don't parse.
pub fn extract_numeric(table: &Table, column: i64) -> Result<Vec<f64>> {
    let column = table.check_column(column)?;
    Ok(extract_numeric_at(table, column))
}

pub(crate) fn is_numeric_at(table: &Table, column: usize) -> bool {
    table.column_cells(column).all(|c| parse_cell(c).is_some())
}

pub(crate) fn extract_numeric_at(table: &Table, column: usize) -> Vec<f64> {
    table.column_cells(column).filter_map(parse_cell).collect()
}

/// Indices of all numeric columns, in header order.
pub fn numeric_columns(table: &Table) -> Vec<usize> {
    (0..table.column_count())
        .filter(|&c| is_numeric_at(table, c))
        .collect()
}
