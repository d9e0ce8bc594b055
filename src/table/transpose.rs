/// Transpose a table: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst, so a
/// `[dimension, mflops]` record table turns into one row of dimensions
/// followed by one row of throughputs.
///
/// # Arguments
///
/// * `src` - Source table (rows × cols), row-major
/// * `dst` - Destination table (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Panics
///
/// Panics if either slice isn't exactly `rows * cols` long.
///
/// # Example
///
/// ```
/// use mvplot::table::transpose::transpose;
///
/// let src = vec![10.0, 100.0,     // 3 records × 2 fields
///                20.0, 250.0,
///                30.0, 400.0];
/// let mut dst = vec![0.0; 6];     // will be 2×3
///
/// transpose(&src, &mut dst, 3, 2);
///
/// assert_eq!(dst, vec![10.0, 20.0, 30.0,
///                      100.0, 250.0, 400.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), rows * cols, "dst: expected {}x{}={} elements", cols, rows, rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let src = vec![64.0, 812.5];
        let mut dst = vec![0.0; 2];
        transpose(&src, &mut dst, 1, 2);
        assert_eq!(dst, vec![64.0, 812.5]);
    }

    #[test]
    fn test_twice_is_identity() {
        let src: Vec<f64> = (0..12).map(|i| i as f64 * 1.5).collect();
        let mut once = vec![0.0; 12];
        let mut twice = vec![0.0; 12];
        transpose(&src, &mut once, 4, 3);
        transpose(&once, &mut twice, 3, 4);
        assert_eq!(src, twice);
    }

    #[test]
    #[should_panic(expected = "src: expected")]
    fn test_size_mismatch_panics() {
        let mut dst = vec![0.0; 4];
        transpose(&[1.0, 2.0, 3.0], &mut dst, 2, 2);
    }
}
