use std::io;
use std::path::Path;

use super::model::{FilterPredicate, Table};
use super::typer;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Row predicate
// ---------------------------------------------------------------------------

/// Rows whose cell at `predicate.column` parses and satisfies the
/// comparison, in table order. Rows that are too short or whose cell is not
/// numeric are left out.
pub fn filter_rows<'a>(table: &'a Table, predicate: &FilterPredicate) -> Vec<&'a [String]> {
    table
        .rows()
        .iter()
        .filter(|row| {
            row.get(predicate.column)
                .and_then(|cell| typer::parse_cell(cell))
                .is_some_and(|v| predicate.comparator.matches(v, predicate.threshold))
        })
        .map(Vec::as_slice)
        .collect()
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Write the header and `rows` to `sink`, fields joined by the table's
/// delimiter. Fields are written verbatim: an embedded delimiter is not
/// quoted. Returns the number of data rows written.
pub fn write_rows<W: io::Write>(table: &Table, rows: &[&[String]], sink: W) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter())
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(table.headers())?;
    for row in rows {
        writer.write_record(row.iter())?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Export the rows matching `predicate` to a file at `path`.
pub fn export_filtered(table: &Table, predicate: &FilterPredicate, path: &Path) -> Result<usize> {
    let rows = filter_rows(table, predicate);
    let file = std::fs::File::create(path)?;
    let written = write_rows(table, &rows, io::BufWriter::new(file))?;
    log::info!(
        "Exported {written} rows (column {} {} {}) to {}",
        predicate.column,
        predicate.comparator,
        predicate.threshold,
        path.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader;
    use crate::data::model::Comparator;
    use crate::error::AnalysisError;

    fn prices() -> Table {
        Table::from_strs(
            &["item", "price", "qty"],
            &[
                &["a", "1.9995", "1"],
                &["b", "2.0", "2"],
                &["c", "2.0011", "3"],
                &["d", "n/a", "4"],
                &["e"],
                &["f", "5", "6"],
            ],
        )
    }

    fn names(rows: &[&[String]]) -> Vec<String> {
        rows.iter().map(|r| r[0].clone()).collect()
    }

    #[test]
    fn equality_within_tolerance() {
        let t = prices();
        let p = FilterPredicate::new(&t, 1, "=", 2.0).unwrap();
        assert_eq!(names(&filter_rows(&t, &p)), vec!["a", "b"]);
    }

    #[test]
    fn ordering_comparators() {
        let t = prices();
        let cases = [
            (">", vec!["c", "f"]),
            ("<", vec!["a"]),
            (">=", vec!["b", "c", "f"]),
            ("<=", vec!["a", "b"]),
        ];
        for (cmp, expected) in cases {
            let p = FilterPredicate::new(&t, 1, cmp, 2.0).unwrap();
            assert_eq!(names(&filter_rows(&t, &p)), expected, "{cmp}");
        }
    }

    #[test]
    fn invalid_requests_fail_up_front() {
        let t = prices();
        assert!(matches!(
            FilterPredicate::new(&t, 3, ">", 0.0),
            Err(AnalysisError::InvalidColumn { .. })
        ));
        assert!(matches!(
            FilterPredicate::new(&t, 1, "=>", 0.0),
            Err(AnalysisError::InvalidComparator(_))
        ));
    }

    #[test]
    fn export_writes_header_and_matching_rows() {
        let t = Table::from_strs(
            &["id", "score", "note"],
            &[&["1", "10", "ok"], &["2", "30"], &["3", "20", "x;y"]],
        );
        let p = FilterPredicate {
            column: 1,
            comparator: Comparator::Greater,
            threshold: 15.0,
        };
        let mut out = Vec::new();
        let n = write_rows(&t, &filter_rows(&t, &p), &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "id,score,note\n2,30\n3,20,x;y\n");
    }

    #[test]
    fn embedded_delimiter_is_not_quoted() {
        let t = Table::from_strs(&["a", "b"], &[&["1", "x,y"]]);
        let p = FilterPredicate::new(&t, 0, ">=", 0.0).unwrap();
        let mut out = Vec::new();
        write_rows(&t, &filter_rows(&t, &p), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\n1,x,y\n");
    }

    #[test]
    fn no_matches_writes_header_only() {
        let t = prices();
        let p = FilterPredicate::new(&t, 2, ">", 100.0).unwrap();
        let mut out = Vec::new();
        assert_eq!(write_rows(&t, &filter_rows(&t, &p), &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "item,price,qty\n");
    }

    #[test]
    fn export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let t = Table::from_strs(
            &["v", "label"],
            &[&["4", "a"], &["-1", "b"], &["2.5", "c"], &["x", "d"], &["7", "e"]],
        );
        let p = FilterPredicate::new(&t, 0, ">=", 2.5).unwrap();
        assert_eq!(export_filtered(&t, &p, &path).unwrap(), 3);

        let back = loader::load_file(&path).unwrap();
        assert_eq!(back.headers(), t.headers());
        let values = typer::extract_numeric(&back, 0).unwrap();
        assert_eq!(values, vec![4.0, 2.5, 7.0]);
        assert!(values.iter().all(|v| *v >= 2.5));
    }

    #[test]
    fn unwritable_destination_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let t = prices();
        let p = FilterPredicate::new(&t, 1, ">", 0.0).unwrap();
        assert!(matches!(export_filtered(&t, &p, &path), Err(AnalysisError::Io(_))));
    }
}
