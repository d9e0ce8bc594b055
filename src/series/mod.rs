//! Benchmark series: one plotted line of `(dimension, mflops)` pairs.

pub mod load;

pub use load::{load_series, write_series};

use crate::error::{PlotError, Result};
use crate::table::Table;

/// Ordered `(dimension, throughput)` pairs from one driver's output.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSeries {
    name: String,
    points: Vec<(f64, f64)>,
}

impl BenchmarkSeries {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Build a series from a record table (rows = records).
    ///
    /// The table is transposed so row 0 holds every dimension and row 1
    /// every throughput; those two rows are zipped into pairs. Columns past
    /// the second are ignored.
    pub fn from_table(name: impl Into<String>, table: &Table) -> Result<Self> {
        if table.cols() < 2 {
            return Err(PlotError::TooFewColumns {
                found: table.cols(),
            });
        }

        let t = table.transposed();
        let points = t
            .row(0)
            .iter()
            .copied()
            .zip(t.row(1).iter().copied())
            .collect();

        Ok(Self::new(name, points))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Matrix dimensions (x values).
    pub fn dimensions(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// Throughputs in Mflops (y values).
    pub fn mflops(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_table_pairs_first_two_columns() {
        let t = Table::from_row_major(vec![10.0, 100.0, 9.0, 20.0, 250.0, 9.0], 2, 3);
        let s = BenchmarkSeries::from_table("row", &t).unwrap();

        assert_eq!(s.name(), "row");
        assert_eq!(s.points(), &[(10.0, 100.0), (20.0, 250.0)]);
        assert_eq!(s.dimensions(), vec![10.0, 20.0]);
        assert_eq!(s.mflops(), vec![100.0, 250.0]);
    }

    #[test]
    fn test_single_column_rejected() {
        let t = Table::from_row_major(vec![1.0, 2.0, 3.0], 3, 1);
        assert!(matches!(
            BenchmarkSeries::from_table("blas", &t),
            Err(PlotError::TooFewColumns { found: 1 })
        ));
    }
}
