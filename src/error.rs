use thiserror::Error;

/// Recoverable failures of the analysis core.
///
/// Individual cells that fail to parse as numbers are never errors; they are
/// simply skipped by numeric extraction.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// `index` is 0-based; the message shows the 1-based column number.
    #[error("invalid column number {} (valid 1..={column_count})", .index.saturating_add(1))]
    InvalidColumn { index: i64, column_count: usize },

    #[error("invalid comparator '{0}' (expected one of >, <, =, >=, <=)")]
    InvalidComparator(String),

    #[error("no numeric data found in column '{column}'")]
    NoNumericData { column: String },

    #[error("need at least 2 numeric columns for correlation analysis, found {found}")]
    InsufficientNumericColumns { found: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_column_message_is_one_based() {
        let e = AnalysisError::InvalidColumn {
            index: 8,
            column_count: 3,
        };
        assert_eq!(e.to_string(), "invalid column number 9 (valid 1..=3)");
    }
}
