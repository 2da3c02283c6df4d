use std::collections::HashMap;

use super::model::Table;
use super::typer;
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Descriptive statistics of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divisor = count).
    pub std_dev: f64,
}

/// One distinct value of a categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
    /// `100 * count / total_entries`, unrounded.
    pub percentage: f64,
}

/// Frequency distribution, highest count first; equal counts keep the order
/// in which the values were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub total_entries: usize,
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericSummary),
    Categorical(FrequencyTable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAnalysis {
    pub column: usize,
    pub name: String,
    pub stats: ColumnStats,
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze one column (0-based): statistics when every present cell is
/// numeric, a frequency distribution otherwise.
pub fn analyze_column(table: &Table, column: i64) -> Result<ColumnAnalysis> {
    let column = table.check_column(column)?;
    let name = table.headers()[column].clone();

    let stats = if typer::is_numeric_at(table, column) {
        let values = typer::extract_numeric_at(table, column);
        let summary = summarize(&values).ok_or_else(|| AnalysisError::NoNumericData {
            column: name.clone(),
        })?;
        log::debug!("column '{name}': numeric, {} values", summary.count);
        ColumnStats::Numeric(summary)
    } else {
        let freq = frequency_table(table.column_cells(column));
        log::debug!(
            "column '{name}': categorical, {} entries, {} unique",
            freq.total_entries,
            freq.unique_count()
        );
        ColumnStats::Categorical(freq)
    };

    Ok(ColumnAnalysis {
        column,
        name,
        stats,
    })
}

/// Descriptive statistics of `values`, or `None` when empty.
pub fn summarize(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let mean = sum / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    let variance = sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;

    Some(NumericSummary {
        count,
        sum,
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        std_dev: variance.sqrt(),
    })
}

/// Count occurrences of each distinct cell (case-sensitive, exact match).
pub fn frequency_table<'a>(cells: impl IntoIterator<Item = &'a str>) -> FrequencyTable {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total_entries = 0;

    for cell in cells {
        total_entries += 1;
        match position.get(cell) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(cell, counts.len());
                counts.push((cell, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let entries = counts
        .into_iter()
        .map(|(value, count)| FrequencyEntry {
            value: value.to_string(),
            count,
            percentage: 100.0 * count as f64 / total_entries as f64,
        })
        .collect();

    FrequencyTable {
        total_entries,
        entries,
    }
}
