/// Data layer: table model, loading, and the analysis engines.
///
/// Architecture:
/// ```text
///        .csv
///         │
///         ▼
///   ┌──────────┐
///   │  loader  │  parse file → Table (headers + raw string rows)
///   └──────────┘
///         │
///         ▼
///   ┌──────────┐
///   │  typer   │  numeric classification / extraction per column
///   └──────────┘
///         │
///    ┌────┴─────────┬──────────────┬──────────┐
///    ▼              ▼              ▼          ▼
/// ┌───────┐  ┌─────────────┐  ┌────────┐  ┌────────┐
/// │ stats │  │ correlation │  │ search │  │ filter │  predicate → export file
/// └───────┘  └─────────────┘  └────────┘  └────────┘
/// ```

pub mod correlation;
pub mod filter;
pub mod loader;
pub mod model;
pub mod search;
pub mod stats;
pub mod typer;
