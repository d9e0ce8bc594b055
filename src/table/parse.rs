use crate::error::{PlotError, Result};
use crate::table::Table;

/// Parse whitespace-delimited numbers into a rectangular [`Table`].
///
/// One record per line. Blank lines are skipped and `#` starts a comment
/// that runs to the end of the line. The first data row fixes the column
/// count; any later row with a different width is an error, never padded
/// or truncated.
///
/// Line numbers in errors are 1-based and count every line of `text`,
/// including skipped ones, so they match what an editor shows.
///
/// # Example
///
/// ```
/// use mvplot::table::parse_table;
///
/// let t = parse_table("# n mflops\n10 100.0\n20 250.0\n").unwrap();
/// assert_eq!((t.rows(), t.cols()), (2, 2));
/// assert_eq!(t.row(1), &[20.0, 250.0]);
/// ```
pub fn parse_table(text: &str) -> Result<Table> {
    let mut data = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let before = data.len();
        for token in content.split_ascii_whitespace() {
            let value: f64 = token.parse().map_err(|_| PlotError::Parse {
                line,
                token: token.to_string(),
            })?;
            data.push(value);
        }

        let width = data.len() - before;
        if width == 0 {
            continue;
        }
        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(PlotError::RaggedRow {
                line,
                expected: cols,
                found: width,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(PlotError::EmptyTable);
    }

    Ok(Table::from_row_major(data, rows, cols))
}
