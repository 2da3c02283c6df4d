use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use rusty_tabula::app::AnalyzerApp;
use rusty_tabula::data::loader;
use rusty_tabula::state::Session;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    println!("=== RUSTY TABULA DATA ANALYZER ===");

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => ask_for_path()?,
    };

    let table = loader::load_file(&path)
        .with_context(|| format!("could not open file {}", path.display()))?;
    println!(
        "Data loaded successfully! {} rows, {} columns.",
        table.row_count(),
        table.column_count()
    );

    let session = Session::new(table, path.display().to_string());
    let stdin = io::stdin();
    let mut app = AnalyzerApp::new(session, stdin.lock(), io::stdout().lock());
    app.run()
}

fn ask_for_path() -> Result<PathBuf> {
    print!("\nEnter CSV filename: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading file name")?;
    Ok(PathBuf::from(line.trim()))
}
