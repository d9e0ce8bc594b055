//! Plot matrix-vector benchmark results.
//!
//! The matvec drivers each print a table of `dimension mflops` lines: one
//! for a row-major loop, one for a column-major loop, one for BLAS. This
//! crate loads the three tables and overlays them on one chart so you can
//! see where the hand-written loops fall off and BLAS keeps going.
//!
//! ## Usage
//!
//! ```no_run
//! use mvplot::render::PlottersCanvas;
//!
//! // Opens a window and blocks until it is closed
//! let mut canvas = PlottersCanvas::window("mvplot", (1024, 768));
//! mvplot::plot_matvec("out_row", "out_col", "out_blas", &mut canvas).unwrap();
//! ```
//!
//! Drawing goes through the [`render::Canvas`] trait, so the loading and
//! figure logic runs fine without any graphics backend:
//!
//! ```
//! use mvplot::render::{Figure, RecordingCanvas};
//! use mvplot::series::BenchmarkSeries;
//!
//! let s = BenchmarkSeries::new("row", vec![(64.0, 812.0), (128.0, 790.5)]);
//! let mut canvas = RecordingCanvas::new();
//! Figure::matvec(&s, &s, &s).unwrap().render(&mut canvas).unwrap();
//! assert_eq!(canvas.calls().len(), 7);
//! ```
//!
//! ## What's inside
//!
//! - Whitespace table parser with comment and blank-line handling
//! - Strict shape checks (ragged rows are errors, not padding)
//! - Compact line style strings (`"k-o"`, `"r--"`, ...)
//! - `plotters` chart shown in a window, or written to PNG/SVG on request
//! - Legend placed where the data isn't

pub mod config;
pub mod error;
pub mod render;
pub mod series;
pub mod table;

pub use error::{PlotError, Result};
pub use series::{BenchmarkSeries, load_series};

use std::path::Path;

use log::debug;

use crate::config::Cli;
use crate::render::{Canvas, Figure, PlottersCanvas};

/// Load the row, column and BLAS series, in that order.
///
/// Stops at the first file that fails to load.
pub fn load_matvec(
    row: impl AsRef<Path>,
    col: impl AsRef<Path>,
    blas: impl AsRef<Path>,
) -> Result<[BenchmarkSeries; 3]> {
    Ok([
        load_series("row", row)?,
        load_series("col", col)?,
        load_series("blas", blas)?,
    ])
}

/// Load the three driver outputs and draw them on `canvas`.
pub fn plot_matvec<C: Canvas + ?Sized>(
    row: impl AsRef<Path>,
    col: impl AsRef<Path>,
    blas: impl AsRef<Path>,
    canvas: &mut C,
) -> Result<()> {
    let [row, col, blas] = load_matvec(row, col, blas)?;
    debug!(
        "series lengths: row={}, col={}, blas={}",
        row.len(),
        col.len(),
        blas.len()
    );

    Figure::matvec(&row, &col, &blas)?.render(canvas)
}

/// Run the command line tool: show the chart in a window, or write it to
/// the `--output` file when one is given.
pub fn run(cli: &Cli) -> Result<()> {
    let mut canvas = match &cli.output {
        Some(path) => PlottersCanvas::file(path, cli.size()),
        None => PlottersCanvas::window("mvplot", cli.size()),
    };
    plot_matvec(&cli.row, &cli.col, &cli.blas, &mut canvas)
}
