use crate::error::Result;
use crate::render::Canvas;
use crate::render::style::{FigureStyle, LineStyle};
use crate::series::BenchmarkSeries;

/// Styles for the row, column and BLAS lines, in that order.
pub const MATVEC_STYLES: [&str; 3] = ["k-o", "b-h", "r-*"];

/// Legend labels for the row, column and BLAS lines. "columb" is the label
/// the benchmark plots have always carried.
pub const MATVEC_LABELS: [&str; 3] = ["row", "columb", "blas"];

pub const MATVEC_XLABEL: &str = "matrix dimension";
pub const MATVEC_YLABEL: &str = "Mflops";

/// One line handed to [`Canvas::plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSet {
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
}

impl LineSet {
    pub fn from_series(series: &BenchmarkSeries, style: LineStyle) -> Self {
        Self {
            points: series.points().to_vec(),
            style,
        }
    }
}

/// Where the legend box goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLoc {
    /// Pick the corner covering the fewest data points
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub labels: Vec<String>,
    pub loc: LegendLoc,
    /// Marker glyphs drawn per legend entry
    pub numpoints: usize,
}

impl Legend {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.as_ref().to_string()).collect(),
            loc: LegendLoc::Best,
            numpoints: 1,
        }
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub style: FigureStyle,
    pub lines: Vec<LineSet>,
    pub legend: Legend,
    pub xlabel: String,
    pub ylabel: String,
    pub grid: bool,
}

impl Figure {
    /// The matrix-vector benchmark chart: row, column and BLAS throughput
    /// against matrix dimension.
    pub fn matvec(
        row: &BenchmarkSeries,
        col: &BenchmarkSeries,
        blas: &BenchmarkSeries,
    ) -> Result<Self> {
        let mut lines = Vec::with_capacity(3);
        for (series, fmt) in [row, col, blas].into_iter().zip(MATVEC_STYLES) {
            lines.push(LineSet::from_series(series, fmt.parse()?));
        }

        Ok(Self {
            style: FigureStyle::default(),
            lines,
            legend: Legend::new(&MATVEC_LABELS[..]),
            xlabel: MATVEC_XLABEL.to_string(),
            ylabel: MATVEC_YLABEL.to_string(),
            grid: true,
        })
    }

    /// Issue the figure to a canvas.
    ///
    /// Calls go out once each, in this order: style, plot (all lines in one
    /// call), legend, x label, y label, grid, show. The first failing call
    /// stops the sequence.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        canvas.apply_style(&self.style)?;
        canvas.plot(&self.lines)?;
        canvas.legend(&self.legend)?;
        canvas.xlabel(&self.xlabel)?;
        canvas.ylabel(&self.ylabel)?;
        canvas.grid(self.grid)?;
        canvas.show()
    }
}
