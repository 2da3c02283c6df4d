use super::model::Table;

/// Rows containing the search term, as 0-based indices in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub term: String,
    pub rows: Vec<usize>,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Case-sensitive substring search across every cell. A row is listed once
/// no matter how many of its cells match; an empty term matches every row
/// that has at least one cell.
pub fn search(table: &Table, term: &str) -> SearchResult {
    let rows: Vec<usize> = table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| cell.contains(term)))
        .map(|(i, _)| i)
        .collect();

    log::debug!("search '{term}': {} matching rows", rows.len());
    SearchResult {
        term: term.to_string(),
        rows,
    }
}
