use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::AnalysisError;
use crate::state::Session;
use crate::ui::{report, table};

// ---------------------------------------------------------------------------
// Interactive menu loop
// ---------------------------------------------------------------------------

const MENU: &str = "\n=== DATA ANALYZER MENU ===\n\
1. Display dataset information\n\
2. Show first few rows\n\
3. Analyze specific column\n\
4. Find correlations\n\
5. Search data\n\
6. Export filtered data\n\
7. Exit\n\
Choose an option: ";

/// Menu-driven session over any line-based input and text output.
///
/// Failed requests are reported and the menu is shown again; only end of
/// input, option 7, or a broken output stream end the loop.
pub struct AnalyzerApp<R, W> {
    pub session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AnalyzerApp<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let keep_going = match choice.trim() {
                "1" => self.show_info(),
                "2" => self.show_head(),
                "3" => self.analyze_column(),
                "4" => self.find_correlations(),
                "5" => self.search(),
                "6" => self.export(),
                "7" => {
                    writeln!(self.output, "Thank you for using the Data Analyzer!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Ok(true)
                }
            }?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    // -- Menu actions: each returns Ok(false) when input is exhausted --

    fn show_info(&mut self) -> Result<bool> {
        table::dataset_info(&mut self.output, &self.session.table, &self.session.source)?;
        Ok(true)
    }

    fn show_head(&mut self) -> Result<bool> {
        let Some(n) = self.prompt_number::<i64>("How many rows to display? ")? else {
            return Ok(false);
        };
        if let Some(n) = n {
            table::head(&mut self.output, &self.session.table, n)?;
        }
        Ok(true)
    }

    fn analyze_column(&mut self) -> Result<bool> {
        let Some(column) = self.prompt_number::<i64>("Enter column number to analyze: ")? else {
            return Ok(false);
        };
        if let Some(column) = column {
            match self.session.analyze(column) {
                Ok(analysis) => report::column_analysis(&mut self.output, &analysis)?,
                Err(e) => self.report_error(&e)?,
            }
        }
        Ok(true)
    }

    fn find_correlations(&mut self) -> Result<bool> {
        writeln!(self.output, "\n=== CORRELATION ANALYSIS ===")?;
        match self.session.correlations() {
            Ok(r) => report::correlations(&mut self.output, &self.session.table, &r)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    fn search(&mut self) -> Result<bool> {
        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(false);
        };
        let result = self.session.search(&term);
        report::search_results(&mut self.output, &self.session.table, &result)?;
        Ok(true)
    }

    fn export(&mut self) -> Result<bool> {
        let Some(path) = self.prompt("Enter output filename: ")? else {
            return Ok(false);
        };
        let Some(column) = self.prompt_number::<i64>("Enter column number for filtering: ")? else {
            return Ok(false);
        };
        let Some(comparator) = self.prompt("Enter condition (>, <, =, >=, <=): ")? else {
            return Ok(false);
        };
        let Some(threshold) = self.prompt_number::<f64>("Enter value: ")? else {
            return Ok(false);
        };
        let (Some(column), Some(threshold)) = (column, threshold) else {
            return Ok(true);
        };

        let path = path.trim();
        match self
            .session
            .export(Path::new(path), column, comparator.trim(), threshold)
        {
            Ok(n) => writeln!(self.output, "Exported {n} rows to {path}")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(true)
    }

    // -- Input helpers --

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("reading input")?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Outer `None`: end of input. Inner `None`: the answer was not a number
    /// (already reported).
    fn prompt_number<T: std::str::FromStr>(&mut self, question: &str) -> Result<Option<Option<T>>> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };
        match answer.trim().parse::<T>() {
            Ok(v) => Ok(Some(Some(v))),
            Err(_) => {
                log::warn!("not a number: '{answer}'");
                writeln!(self.output, "Invalid number: '{}'", answer.trim())?;
                Ok(Some(None))
            }
        }
    }

    fn report_error(&mut self, e: &AnalysisError) -> Result<()> {
        log::warn!("{e}");
        writeln!(self.output, "Error: {e}")?;
        Ok(())
    }
}
