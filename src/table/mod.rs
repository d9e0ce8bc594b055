//! Numeric tables read from benchmark output files.
//!
//! A driver prints one record per line: matrix dimension, then Mflops,
//! separated by whitespace. [`parse_table`] reads that into a rectangular
//! row-major [`Table`], and [`Table::transposed`] flips it so each field
//! becomes one contiguous row, ready to hand to a plot as x and y values.

pub mod parse;
pub mod transpose;

pub use parse::parse_table;

/// Rectangular table of `f64`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Table {
    /// Build a table from row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_major(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "table: expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Swap rows and columns. Row `j` of the result is column `j` of `self`.
    pub fn transposed(&self) -> Table {
        let mut dst = vec![0.0; self.data.len()];
        transpose::transpose(&self.data, &mut dst, self.rows, self.cols);
        Table {
            data: dst,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposed_rows_are_columns() {
        let t = Table::from_row_major(vec![10.0, 100.0, 20.0, 250.0, 30.0, 400.0], 3, 2);
        let tt = t.transposed();

        assert_eq!(tt.rows(), 2);
        assert_eq!(tt.cols(), 3);
        assert_eq!(tt.row(0), &[10.0, 20.0, 30.0]);
        assert_eq!(tt.row(1), &[100.0, 250.0, 400.0]);
    }

    #[test]
    #[should_panic(expected = "table: expected 2x2=4")]
    fn test_bad_shape_panics() {
        Table::from_row_major(vec![1.0, 2.0, 3.0], 2, 2);
    }
}
