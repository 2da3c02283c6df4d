use std::fmt;
use std::str::FromStr;

use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Table – header names plus raw string cells, read-only after load
// ---------------------------------------------------------------------------

/// The loaded table. Rows may be shorter than the header (ragged); a cell
/// beyond a row's length is absent, never padded.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    delimiter: u8,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Field delimiter the table was read with; exports reuse it.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (`row`, `column`), or `None` when the row is too short.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    /// Every present cell of `column`, in row order.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |r| r.get(column).map(String::as_str))
    }

    /// Validate a 0-based column index against the header count.
    pub fn check_column(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.headers.len())
            .ok_or(AnalysisError::InvalidColumn {
                index,
                column_count: self.headers.len(),
            })
    }

    /// Convert a 1-based, user-facing column number into a checked index.
    pub fn column_from_user(&self, number: i64) -> Result<usize> {
        self.check_column(number.saturating_sub(1))
    }

    /// The first `n` rows (none when `n` is zero or negative).
    pub fn head(&self, n: i64) -> &[Vec<String>] {
        let n = usize::try_from(n).unwrap_or(0).min(self.rows.len());
        &self.rows[..n]
    }
}

#[cfg(test)]
impl Table {
    /// Comma-delimited table from string literals.
    pub(crate) fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            b',',
        )
    }
}

// ---------------------------------------------------------------------------
// Comparator / FilterPredicate
// ---------------------------------------------------------------------------

/// Tolerance used by [`Comparator::Equal`].
pub const EQUALITY_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Greater,
    Less,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::Equal => "=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
        }
    }

    /// `Equal` is a tolerance match; exact float equality is never used.
    pub fn matches(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::Greater => value > threshold,
            Comparator::Less => value < threshold,
            Comparator::Equal => (value - threshold).abs() < EQUALITY_TOLERANCE,
            Comparator::GreaterOrEqual => value >= threshold,
            Comparator::LessOrEqual => value <= threshold,
        }
    }
}

impl FromStr for Comparator {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            ">" => Ok(Comparator::Greater),
            "<" => Ok(Comparator::Less),
            "=" => Ok(Comparator::Equal),
            ">=" => Ok(Comparator::GreaterOrEqual),
            "<=" => Ok(Comparator::LessOrEqual),
            _ => Err(AnalysisError::InvalidComparator(s.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A validated row filter: `row[column] <comparator> threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPredicate {
    pub column: usize,
    pub comparator: Comparator,
    pub threshold: f64,
}

impl FilterPredicate {
    /// Checks the column index first, then the comparator symbol, so an
    /// invalid request is rejected before any row is looked at.
    pub fn new(table: &Table, column: i64, comparator: &str, threshold: f64) -> Result<Self> {
        let column = table.check_column(column)?;
        let comparator = comparator.parse()?;
        Ok(Self {
            column,
            comparator,
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> Table {
        Table::from_strs(&["a", "b", "c"], &[&["1", "x", "y"], &["2"]])
    }

    #[test]
    fn ragged_cells_are_absent() {
        let t = ragged();
        assert_eq!(t.cell(0, 2), Some("y"));
        assert_eq!(t.cell(1, 2), None);
        assert_eq!(t.cell(5, 0), None);
        assert_eq!(t.column_cells(1).collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(t.rows()[1].len(), 1);
    }

    #[test]
    fn column_validation() {
        let t = ragged();
        assert_eq!(t.check_column(0).unwrap(), 0);
        assert_eq!(t.check_column(2).unwrap(), 2);
        assert!(matches!(
            t.check_column(3),
            Err(AnalysisError::InvalidColumn { index: 3, column_count: 3 })
        ));
        assert!(matches!(
            t.check_column(-1),
            Err(AnalysisError::InvalidColumn { index: -1, .. })
        ));
        assert_eq!(t.column_from_user(1).unwrap(), 0);
        assert!(t.column_from_user(0).is_err());
        assert!(t.column_from_user(i64::MIN).is_err());
    }

    #[test]
    fn head_is_clamped() {
        let t = ragged();
        assert_eq!(t.head(5).len(), 2);
        assert_eq!(t.head(1).len(), 1);
        assert!(t.head(0).is_empty());
        assert!(t.head(-3).is_empty());
    }

    #[test]
    fn comparator_parsing() {
        assert_eq!(">=".parse::<Comparator>().unwrap(), Comparator::GreaterOrEqual);
        assert_eq!("=".parse::<Comparator>().unwrap(), Comparator::Equal);
        assert!(matches!(
            "==".parse::<Comparator>(),
            Err(AnalysisError::InvalidComparator(s)) if s == "=="
        ));
        assert!("!=".parse::<Comparator>().is_err());
    }

    #[test]
    fn equality_uses_tolerance() {
        assert!(Comparator::Equal.matches(1.9995, 2.0));
        assert!(Comparator::Equal.matches(2.0, 2.0));
        assert!(!Comparator::Equal.matches(2.0011, 2.0));
        assert!(Comparator::GreaterOrEqual.matches(2.0, 2.0));
        assert!(!Comparator::Greater.matches(2.0, 2.0));
        assert!(Comparator::LessOrEqual.matches(1.0, 2.0));
    }

    #[test]
    fn predicate_checks_column_before_comparator() {
        let t = ragged();
        assert!(matches!(
            FilterPredicate::new(&t, 9, "??", 1.0),
            Err(AnalysisError::InvalidColumn { .. })
        ));
        assert!(matches!(
            FilterPredicate::new(&t, 0, "??", 1.0),
            Err(AnalysisError::InvalidComparator(_))
        ));
        let p = FilterPredicate::new(&t, 0, "<", 1.5).unwrap();
        assert_eq!(p.comparator, Comparator::Less);
    }
}
