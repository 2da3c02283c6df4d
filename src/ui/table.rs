use std::io::{self, Write};

use super::CELL_WIDTH;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Dataset information
// ---------------------------------------------------------------------------

/// File name, shape, and the numbered (1-based) header list.
pub fn dataset_info<W: Write>(out: &mut W, table: &Table, source: &str) -> io::Result<()> {
    writeln!(out, "\n=== DATASET INFORMATION ===")?;
    writeln!(out, "File: {source}")?;
    writeln!(out, "Rows: {}", table.row_count())?;
    writeln!(out, "Columns: {}", table.column_count())?;
    writeln!(out, "\nColumn Headers:")?;
    for (i, h) in table.headers().iter().enumerate() {
        writeln!(out, "{}. {h}", i + 1)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Row preview
// ---------------------------------------------------------------------------

/// One row of right-aligned, fixed-width cells.
pub fn write_cells<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S]) -> io::Result<()> {
    for cell in cells {
        write!(out, "{:>width$}", cell.as_ref(), width = CELL_WIDTH)?;
    }
    Ok(())
}

/// Header line, a dashed separator, then the first `n` rows.
pub fn head<W: Write>(out: &mut W, table: &Table, n: i64) -> io::Result<()> {
    writeln!(out, "\n=== FIRST {n} ROWS ===")?;
    write_cells(out, table.headers())?;
    writeln!(out)?;
    for _ in table.headers() {
        write!(out, "{}", "-".repeat(CELL_WIDTH))?;
    }
    writeln!(out)?;
    for row in table.head(n) {
        write_cells(out, row)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn info_lists_headers() {
        let t = Table::from_strs(&["id", "name"], &[&["1", "a"]]);
        let text = render(|o| dataset_info(o, &t, "people.csv"));
        assert!(text.contains("File: people.csv"));
        assert!(text.contains("Rows: 1\nColumns: 2"));
        assert!(text.contains("1. id\n2. name\n"));
    }

    #[test]
    fn head_is_fixed_width() {
        let t = Table::from_strs(&["a", "b"], &[&["1", "2"], &["3"], &["5", "6"]]);
        let text = render(|o| head(o, &t, 2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "=== FIRST 2 ROWS ===");
        assert_eq!(lines[2], format!("{:>15}{:>15}", "a", "b"));
        assert_eq!(lines[3], "-".repeat(30));
        assert_eq!(lines[4], format!("{:>15}{:>15}", "1", "2"));
        assert_eq!(lines[5], format!("{:>15}", "3"));
        assert_eq!(lines.len(), 6);
    }
}
