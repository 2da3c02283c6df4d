use std::path::Path;

use crate::data::correlation::{self, CorrelationReport};
use crate::data::filter;
use crate::data::model::{FilterPredicate, Table};
use crate::data::search::{self, SearchResult};
use crate::data::stats::{self, ColumnAnalysis};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Analysis session
// ---------------------------------------------------------------------------

/// A loaded table plus where it came from. Column numbers taken here are the
/// user-facing 1-based ones.
pub struct Session {
    pub table: Table,
    pub source: String,
}

impl Session {
    pub fn new(table: Table, source: impl Into<String>) -> Self {
        Self {
            table,
            source: source.into(),
        }
    }

    pub fn analyze(&self, column_number: i64) -> Result<ColumnAnalysis> {
        let column = self.table.column_from_user(column_number)?;
        stats::analyze_column(&self.table, column as i64)
    }

    pub fn correlations(&self) -> Result<CorrelationReport> {
        correlation::find_correlations(&self.table)
    }

    pub fn search(&self, term: &str) -> SearchResult {
        search::search(&self.table, term)
    }

    /// Export rows matching `column_number <comparator> threshold` to `path`.
    /// The request is validated before the output file is created.
    pub fn export(
        &self,
        path: &Path,
        column_number: i64,
        comparator: &str,
        threshold: f64,
    ) -> Result<usize> {
        let predicate = FilterPredicate::new(
            &self.table,
            column_number.saturating_sub(1),
            comparator,
            threshold,
        )?;
        filter::export_filtered(&self.table, &predicate, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn session() -> Session {
        Session::new(
            Table::from_strs(&["x", "y", "tag"], &[&["1", "2", "a"], &["2", "4", "b"], &["3", "6", "a"]]),
            "test.csv",
        )
    }

    #[test]
    fn columns_are_one_based() {
        let s = session();
        assert_eq!(s.analyze(1).unwrap().name, "x");
        assert_eq!(s.analyze(3).unwrap().name, "tag");
        assert!(matches!(s.analyze(0), Err(AnalysisError::InvalidColumn { .. })));
        assert!(matches!(s.analyze(4), Err(AnalysisError::InvalidColumn { .. })));
    }

    #[test]
    fn invalid_export_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let s = session();
        assert!(matches!(
            s.export(&path, 9, ">", 1.0),
            Err(AnalysisError::InvalidColumn { .. })
        ));
        assert!(matches!(
            s.export(&path, 1, "~", 1.0),
            Err(AnalysisError::InvalidComparator(_))
        ));
        assert!(!path.exists());

        assert_eq!(s.export(&path, 2, ">", 3.0).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x,y,tag\n2,4,b\n3,6,a\n");
    }

    #[test]
    fn correlation_and_search() {
        let s = session();
        assert_eq!(s.correlations().unwrap().pairs.len(), 1);
        assert_eq!(s.search("a").rows, vec![0, 2]);
    }
}
