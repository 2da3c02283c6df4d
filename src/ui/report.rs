use std::io::{self, Write};

use super::table::write_cells;
use crate::data::correlation::CorrelationReport;
use crate::data::model::Table;
use crate::data::search::SearchResult;
use crate::data::stats::{ColumnAnalysis, ColumnStats, FrequencyTable, NumericSummary};

// ---------------------------------------------------------------------------
// Column analysis
// ---------------------------------------------------------------------------

pub fn column_analysis<W: Write>(out: &mut W, analysis: &ColumnAnalysis) -> io::Result<()> {
    writeln!(out, "\n=== ANALYSIS FOR: {} ===", analysis.name)?;
    match &analysis.stats {
        ColumnStats::Numeric(s) => numeric_summary(out, s),
        ColumnStats::Categorical(f) => frequency_table(out, f),
    }
}

fn numeric_summary<W: Write>(out: &mut W, s: &NumericSummary) -> io::Result<()> {
    writeln!(out, "Count: {}", s.count)?;
    writeln!(out, "Mean: {:.2}", s.mean)?;
    writeln!(out, "Median: {:.2}", s.median)?;
    writeln!(out, "Min: {:.2}", s.min)?;
    writeln!(out, "Max: {:.2}", s.max)?;
    writeln!(out, "Standard Deviation: {:.2}", s.std_dev)?;
    writeln!(out, "Sum: {:.2}", s.sum)
}

fn frequency_table<W: Write>(out: &mut W, f: &FrequencyTable) -> io::Result<()> {
    writeln!(out, "Categorical Data Analysis:")?;
    writeln!(out, "Total entries: {}", f.total_entries)?;
    writeln!(out, "Unique values: {}", f.unique_count())?;
    writeln!(out, "\nFrequency distribution:")?;
    for e in &f.entries {
        writeln!(out, "{:>20}: {:>5} ({:.1}%)", e.value, e.count, e.percentage)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Correlations
// ---------------------------------------------------------------------------

pub fn correlations<W: Write>(out: &mut W, table: &Table, report: &CorrelationReport) -> io::Result<()> {
    let headers = table.headers();
    let names: Vec<&str> = report
        .numeric_columns
        .iter()
        .map(|&c| headers[c].as_str())
        .collect();
    writeln!(out, "Numeric columns found: {}\n", names.join(" "))?;
    for p in &report.pairs {
        writeln!(
            out,
            "{} <-> {}: {:.3}",
            headers[p.column_a], headers[p.column_b], p.coefficient
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Matching rows with their 1-based row numbers, then the match count.
pub fn search_results<W: Write>(out: &mut W, table: &Table, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "\n=== SEARCH RESULTS FOR: '{}' ===", result.term)?;
    for &i in &result.rows {
        write!(out, "Row {}: ", i + 1)?;
        write_cells(out, &table.rows()[i])?;
        writeln!(out)?;
    }
    writeln!(out, "Found {} matching rows.", result.count())
}
