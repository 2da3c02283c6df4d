//! # rusty-tabula
//!
//! Interactive analysis of delimited text tables.
//!
//! A CSV file is loaded once into a read-only [`Table`](data::model::Table);
//! every query then works on it directly:
//!
//! - [`data::typer`]: numeric-vs-text column classification and extraction
//! - [`data::stats`]: descriptive statistics or frequency distribution per column
//! - [`data::correlation`]: Pearson correlation between numeric columns
//! - [`data::search`]: substring search over all cells
//! - [`data::filter`]: numeric row filter and flat CSV export
//! - [`app`]: the menu-driven console session

pub mod app;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
