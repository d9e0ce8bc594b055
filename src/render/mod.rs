//! Drawing benchmark series as a chart.
//!
//! Rendering is a capability behind the [`Canvas`] trait. A [`Figure`]
//! knows *what* to draw and issues the calls in a fixed order; a canvas
//! decides *how*. [`PlottersCanvas`] draws with `plotters` into a window
//! (the default) or an image file, and [`RecordingCanvas`] just remembers
//! the calls so figure logic can be checked without any graphics backend.

pub mod figure;
pub mod layout;
pub mod plotters_canvas;
pub mod recording;
pub mod style;
pub mod window;

pub use figure::{Figure, Legend, LegendLoc, LineSet};
pub use plotters_canvas::{Output, PlottersCanvas};
pub use recording::{CanvasCall, RecordingCanvas};
pub use style::{Color, FigureStyle, LineKind, LineStyle, Marker, TickDirection};

use crate::error::Result;

/// The calls a plotting script makes, one method each.
///
/// Implementations may draw eagerly or buffer until [`Canvas::show`].
pub trait Canvas {
    /// Set fonts, tick direction and layout for everything that follows.
    fn apply_style(&mut self, style: &FigureStyle) -> Result<()>;

    /// Add lines to the axes, in draw order.
    fn plot(&mut self, lines: &[LineSet]) -> Result<()>;

    /// Label the plotted lines, in the order they were plotted.
    fn legend(&mut self, legend: &Legend) -> Result<()>;

    fn xlabel(&mut self, label: &str) -> Result<()>;

    fn ylabel(&mut self, label: &str) -> Result<()>;

    fn grid(&mut self, enabled: bool) -> Result<()>;

    /// Present the finished figure.
    fn show(&mut self) -> Result<()>;
}
