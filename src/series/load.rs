use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};

use crate::error::{PlotError, Result};
use crate::series::BenchmarkSeries;
use crate::table::parse_table;

/// Load one benchmark series from a whitespace-delimited file.
///
/// Reads the whole file, parses it into a table, and pairs column 0
/// (dimension) with column 1 (Mflops). The series has one point per data
/// row. Parse and shape errors are wrapped in [`PlotError::InSeries`] so
/// the message names the file.
///
/// # Errors
///
/// * [`PlotError::FileNotFound`] if `path` doesn't exist
/// * [`PlotError::Io`] for any other read failure
/// * [`PlotError::InSeries`] around a parse, ragged-row, empty-table or
///   too-few-columns error
pub fn load_series(name: &str, path: impl AsRef<Path>) -> Result<BenchmarkSeries> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PlotError::FileNotFound(path.to_path_buf()),
        _ => PlotError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let in_file = |source: PlotError| PlotError::InSeries {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    let table = parse_table(&text).map_err(in_file)?;
    if table.cols() > 2 {
        warn!(
            "{}: {} columns, using the first two",
            path.display(),
            table.cols()
        );
    }
    let series = BenchmarkSeries::from_table(name, &table).map_err(in_file)?;

    debug!(
        "loaded {} from {}: {} rows x {} cols",
        name,
        path.display(),
        table.rows(),
        table.cols()
    );

    Ok(series)
}

/// Write a series in the same format [`load_series`] reads.
///
/// One `dimension mflops` pair per line. `f64` display is the shortest
/// representation that parses back to the same value.
pub fn write_series(path: impl AsRef<Path>, series: &BenchmarkSeries) -> Result<()> {
    let path = path.as_ref();

    let mut out = String::with_capacity(series.len() * 16);
    for &(x, y) in series.points() {
        // Writing into a String can't fail
        let _ = writeln!(out, "{} {}", x, y);
    }

    fs::write(path, out).map_err(|e| PlotError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
