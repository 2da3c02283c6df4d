use super::model::Table;
use super::typer;
use crate::error::{AnalysisError, Result};

/// Pearson coefficient between two numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationPair {
    pub column_a: usize,
    pub column_b: usize,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationReport {
    /// Numeric column indices, in header order.
    pub numeric_columns: Vec<usize>,
    /// Computed pairs. Pairs whose extracted lengths differ (or are empty)
    /// are skipped, so this may be empty even with numeric columns present.
    pub pairs: Vec<CorrelationPair>,
}

/// Pearson correlation for every unordered pair of numeric columns.
pub fn find_correlations(table: &Table) -> Result<CorrelationReport> {
    let numeric_columns = typer::numeric_columns(table);
    if numeric_columns.len() < 2 {
        return Err(AnalysisError::InsufficientNumericColumns {
            found: numeric_columns.len(),
        });
    }

    let series: Vec<Vec<f64>> = numeric_columns
        .iter()
        .map(|&c| typer::extract_numeric_at(table, c))
        .collect();

    let mut pairs = Vec::new();
    for i in 0..numeric_columns.len() {
        for j in (i + 1)..numeric_columns.len() {
            let (x, y) = (&series[i], &series[j]);
            if x.len() != y.len() || x.is_empty() {
                log::debug!(
                    "skipping pair ({}, {}): {} vs {} values",
                    numeric_columns[i],
                    numeric_columns[j],
                    x.len(),
                    y.len()
                );
                continue;
            }
            pairs.push(CorrelationPair {
                column_a: numeric_columns[i],
                column_b: numeric_columns[j],
                coefficient: pearson(x, y),
            });
        }
    }

    log::debug!(
        "{} numeric columns, {} correlation pairs",
        numeric_columns.len(),
        pairs.len()
    );
    Ok(CorrelationReport {
        numeric_columns,
        pairs,
    })
}

/// Pearson correlation coefficient. Returns 0.0 when the series differ in
/// length, are empty, or either one is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    // r is scale-invariant; working on x / max|x| keeps the sums finite
    let (Some(x), Some(y)) = (unit_scaled(x), unit_scaled(y)) else {
        return 0.0;
    };
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut num, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(&y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        num += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    let denom = (sum_x2 * sum_y2).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    // rounding can push |r| a hair past 1
    (num / denom).clamp(-1.0, 1.0)
}

/// `values` divided by their largest magnitude, or `None` if all are zero.
fn unit_scaled(values: &[f64]) -> Option<Vec<f64>> {
    let scale = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    (scale > 0.0).then(|| values.iter().map(|v| v / scale).collect())
}
