use std::io;
use std::path::Path;

use super::model::Table;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-delimited table from a file.
pub fn load_file(path: &Path) -> Result<Table> {
    TableLoader::new().load_path(path)
}

/// CSV reader configuration.
///
/// Layout: one header row, then zero or more data rows. Cells are trimmed;
/// rows with fewer (or more) fields than the header are kept as they are.
#[derive(Debug, Clone)]
pub struct TableLoader {
    delimiter: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn load_path(&self, path: &Path) -> Result<Table> {
        let file = std::fs::File::open(path)?;
        let table = self.load_reader(file)?;
        log::info!(
            "Loaded {} rows, {} columns from {}",
            table.row_count(),
            table.column_count(),
            path.display()
        );
        Ok(table)
    }

    pub fn load_reader<R: io::Read>(&self, source: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        // Fields are decoded lossily so a stray non-UTF-8 byte (e.g. Latin-1
        // text) becomes U+FFFD instead of failing the whole load.
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = decode_field(h);
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h
                }
            })
            .collect();

        let mut rows = Vec::new();
        let mut record = csv::ByteRecord::new();
        while reader.read_byte_record(&mut record)? {
            rows.push(record.iter().map(decode_field).collect::<Vec<_>>());
        }

        Ok(Table::new(headers, rows, self.delimiter))
    }
}

fn decode_field(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
