use std::fmt::Display;
use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, DrawingArea, DrawingBackend, EmptyElement, IntoDrawingArea,
    LabelAreaPosition, LineSeries, Polygon, RGBColor, SVGBackend, SeriesLabelPosition, BLACK,
    WHITE,
};
use plotters::series::DashedLineSeries;
use plotters::style::Color as _;

use crate::error::{PlotError, Result};
use crate::render::figure::{Legend, LegendLoc, LineSet};
use crate::render::style::{FigureStyle, LineKind, LineStyle, Marker, TickDirection};
use crate::render::{layout, window, Canvas};

const MARGIN_PX: i32 = 20;
const TICK_PX: i32 = 6;
const LINE_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 5;
const LEGEND_BAR: [(i32, i32); 4] = [(-12, -1), (12, -1), (12, 1), (-12, 1)];

/// Where [`Canvas::show`] sends the finished chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// On-screen window; `show` blocks until it is closed
    Window { title: String },
    /// Image file. `.svg` uses the SVG backend, anything else goes through
    /// the bitmap backend, which picks the format from the extension.
    File(PathBuf),
}

/// Canvas that draws with `plotters`.
///
/// Calls are buffered and the whole chart is drawn on [`Canvas::show`],
/// either into a window or into an image file.
pub struct PlottersCanvas {
    output: Output,
    size: (u32, u32),
    style: FigureStyle,
    lines: Vec<LineSet>,
    legend: Option<Legend>,
    xlabel: String,
    ylabel: String,
    grid: bool,
}

impl PlottersCanvas {
    pub fn new(output: Output, size: (u32, u32)) -> Self {
        Self {
            output,
            size,
            style: FigureStyle::default(),
            lines: Vec::new(),
            legend: None,
            xlabel: String::new(),
            ylabel: String::new(),
            grid: false,
        }
    }

    /// Present the chart in a window titled `title`.
    pub fn window(title: impl Into<String>, size: (u32, u32)) -> Self {
        Self::new(
            Output::Window {
                title: title.into(),
            },
            size,
        )
    }

    /// Write the chart to `path`.
    pub fn file(path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self::new(Output::File(path.into()), size)
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Draw the chart into a packed RGB buffer, 3 bytes per pixel, rows
    /// top to bottom.
    pub fn render_rgb(&self) -> Result<Vec<u8>> {
        if self.lines.is_empty() {
            return Err(PlotError::NothingToShow);
        }

        let (w, h) = self.size;
        let mut buf = vec![0u8; w as usize * h as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, self.size).into_drawing_area();
            self.draw(root)?;
        }
        Ok(buf)
    }

    fn write_file(&self, path: &Path) -> Result<()> {
        if is_svg(path) {
            self.draw(SVGBackend::new(path, self.size).into_drawing_area())?;
        } else {
            self.draw(BitMapBackend::new(path, self.size).into_drawing_area())?;
        }

        info!(
            "wrote {}x{} figure to {}",
            self.size.0,
            self.size.1,
            path.display()
        );
        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        let bounds = layout::data_bounds(&self.lines).ok_or(PlotError::NothingToShow)?;
        let areas = layout::label_area_sizes(&self.style, &bounds);
        let family = self.style.font_family.as_str();
        let font_size = f64::from(self.style.font_size);
        debug!("bounds {:?}, label areas {:?}", bounds, areas);

        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(MARGIN_PX)
            .x_label_area_size(areas.x as i32)
            .y_label_area_size(areas.y as i32)
            .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
            .map_err(render_err)?;

        // Positive tick marks point away from the plot area
        let tick = match self.style.tick_direction {
            TickDirection::Out => TICK_PX,
            TickDirection::In => -TICK_PX,
        };
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.xlabel.as_str())
            .y_desc(self.ylabel.as_str())
            .label_style((family, font_size))
            .axis_desc_style((family, font_size * 1.1))
            .set_tick_mark_size(LabelAreaPosition::Bottom, tick)
            .set_tick_mark_size(LabelAreaPosition::Left, tick);
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;

        for (i, line) in self.lines.iter().enumerate() {
            let (r, g, b) = line.style.color.rgb();
            let color = RGBColor(r, g, b);
            let stroke = color.stroke_width(LINE_WIDTH);
            let fill = color.filled();
            let clamped: Vec<(f64, f64)> = line
                .points
                .iter()
                .map(|&(x, y)| (layout::clamp_axis(x), layout::clamp_axis(y)))
                .collect();
            let runs = layout::finite_runs(&clamped);

            for run in &runs {
                match line.style.line {
                    LineKind::None => {}
                    LineKind::Solid => {
                        chart
                            .draw_series(LineSeries::new(run.iter().copied(), stroke))
                            .map_err(render_err)?;
                    }
                    kind => {
                        let (dash, gap) = dash_pattern(kind);
                        chart
                            .draw_series(DashedLineSeries::new(
                                run.iter().copied(),
                                dash,
                                gap,
                                stroke,
                            ))
                            .map_err(render_err)?;
                    }
                }
            }

            let outline = line.style.marker.outline(MARKER_RADIUS);
            let anno = chart
                .draw_series(
                    runs.iter()
                        .flatten()
                        .filter(|_| !outline.is_empty())
                        .map(|&p| EmptyElement::at(p) + Polygon::new(outline.clone(), fill)),
                )
                .map_err(render_err)?;

            if let Some(label) = self.legend.as_ref().and_then(|l| l.labels.get(i)) {
                let (bar, mark) = legend_glyph(&line.style);
                anno.label(label.as_str()).legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + Polygon::new(bar.clone(), fill)
                        + Polygon::new(mark.clone(), fill)
                });
            }
        }

        if let Some(legend) = &self.legend {
            let loc = layout::resolve_legend_loc(legend.loc, &self.lines, &bounds);
            chart
                .configure_series_labels()
                .position(series_label_position(loc))
                .label_font((family, font_size))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)
    }
}

impl Canvas for PlottersCanvas {
    fn apply_style(&mut self, style: &FigureStyle) -> Result<()> {
        self.style = style.clone();
        Ok(())
    }

    fn plot(&mut self, lines: &[LineSet]) -> Result<()> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }

    fn legend(&mut self, legend: &Legend) -> Result<()> {
        if legend.labels.len() > self.lines.len() {
            debug!(
                "{} legend labels for {} lines, extras ignored",
                legend.labels.len(),
                self.lines.len()
            );
        }
        self.legend = Some(legend.clone());
        Ok(())
    }

    fn xlabel(&mut self, label: &str) -> Result<()> {
        self.xlabel = label.to_string();
        Ok(())
    }

    fn ylabel(&mut self, label: &str) -> Result<()> {
        self.ylabel = label.to_string();
        Ok(())
    }

    fn grid(&mut self, enabled: bool) -> Result<()> {
        self.grid = enabled;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        if self.lines.is_empty() {
            return Err(PlotError::NothingToShow);
        }

        match &self.output {
            Output::File(path) => self.write_file(path),
            Output::Window { title } => {
                let rgb = self.render_rgb()?;
                window::present(title, &rgb, self.size)
            }
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn render_err<E: Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Dash and gap lengths in pixels for broken line kinds.
fn dash_pattern(kind: LineKind) -> (i32, i32) {
    match kind {
        LineKind::Dashed => (8, 5),
        LineKind::DashDot => (10, 3),
        LineKind::Dotted => (2, 3),
        LineKind::Solid | LineKind::None => (1, 0),
    }
}

/// Legend entry glyph as `(bar, marker)`: a short line segment with one
/// marker on it. A line without markers repeats the bar, a marker-only
/// line repeats the marker, so neither polygon is ever empty.
fn legend_glyph(style: &LineStyle) -> (Vec<(i32, i32)>, Vec<(i32, i32)>) {
    let bar = LEGEND_BAR.to_vec();
    match (style.line, style.marker) {
        (_, Marker::None) => (bar.clone(), bar),
        (LineKind::None, m) => {
            let mark = m.outline(MARKER_RADIUS);
            (mark.clone(), mark)
        }
        (_, m) => (bar, m.outline(MARKER_RADIUS)),
    }
}

fn series_label_position(loc: LegendLoc) -> SeriesLabelPosition {
    match loc {
        LegendLoc::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendLoc::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendLoc::LowerRight => SeriesLabelPosition::LowerRight,
        LegendLoc::UpperRight | LegendLoc::Best => SeriesLabelPosition::UpperRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Figure;
    use crate::series::BenchmarkSeries;

    fn matvec_figure() -> Figure {
        let row = BenchmarkSeries::new("row", vec![(10.0, 100.0), (20.0, 250.0), (30.0, 400.0)]);
        let col = BenchmarkSeries::new("col", vec![(10.0, 80.0), (20.0, 120.0), (30.0, 150.0)]);
        let blas = BenchmarkSeries::new("blas", vec![(10.0, 300.0), (20.0, 900.0)]);
        Figure::matvec(&row, &col, &blas).unwrap()
    }

    /// Width and height from a PNG's IHDR chunk.
    fn png_size(bytes: &[u8]) -> (u32, u32) {
        assert_eq!(&bytes[1..4], b"PNG", "not a PNG");
        let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (w, h)
    }

    #[test]
    fn test_show_without_lines_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = PlottersCanvas::file(dir.path().join("empty.svg"), (320, 240));
        assert!(matches!(canvas.show(), Err(PlotError::NothingToShow)));
    }

    #[test]
    fn test_window_without_lines_fails_before_opening() {
        let mut canvas = PlottersCanvas::window("mvplot", (320, 240));
        assert!(matches!(canvas.show(), Err(PlotError::NothingToShow)));
    }

    #[test]
    fn test_only_non_finite_points_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = PlottersCanvas::file(dir.path().join("nan.svg"), (320, 240));
        canvas
            .plot(&[LineSet {
                points: vec![(f64::NAN, 1.0)],
                style: "k-o".parse().unwrap(),
            }])
            .unwrap();
        assert!(matches!(canvas.show(), Err(PlotError::NothingToShow)));
    }

    #[test]
    fn test_renders_matvec_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("matvec.svg");

        let mut canvas = PlottersCanvas::file(&out, (640, 480));
        matvec_figure().render(&mut canvas).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Mflops"));
        assert!(svg.contains("matrix dimension"));
        assert!(svg.contains("columb"));
    }

    #[test]
    fn test_renders_png_at_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("matvec.png");

        let mut canvas = PlottersCanvas::file(&out, (800, 600));
        matvec_figure().render(&mut canvas).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(png_size(&bytes), (800, 600));
    }

    #[test]
    fn test_render_rgb_draws_all_styles() {
        let mut canvas = PlottersCanvas::window("unused", (400, 300));
        canvas.grid(false).unwrap();
        canvas
            .plot(&[
                LineSet {
                    points: vec![(1.0, 1.0), (2.0, f64::NAN), (3.0, 3.0), (4.0, 2.0)],
                    style: "g--s".parse().unwrap(),
                },
                LineSet {
                    points: vec![(1.0, 2.0), (4.0, 4.0)],
                    style: "m:".parse().unwrap(),
                },
                LineSet {
                    points: vec![(2.0, 1.5), (3.0, 2.5)],
                    style: "c^".parse().unwrap(),
                },
            ])
            .unwrap();
        canvas.legend(&Legend::new(&["a", "b", "c"][..])).unwrap();

        let rgb = canvas.render_rgb().unwrap();

        assert_eq!(rgb.len(), 400 * 300 * 3);
        let green = rgb.chunks(3).any(|p| p == [0, 128, 0]);
        let cyan = rgb.chunks(3).any(|p| p == [0, 191, 191]);
        assert!(green && cyan, "expected line and marker pixels");
    }

    #[test]
    fn test_extreme_values_render() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("extreme.svg");
        let mut canvas = PlottersCanvas::file(&out, (320, 240));
        canvas
            .plot(&[LineSet {
                points: vec![(-1e308, 1.0), (1e308, 2.0)],
                style: "k-o".parse().unwrap(),
            }])
            .unwrap();

        canvas.show().unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_svg_extension_case_insensitive() {
        assert!(is_svg(Path::new("a.SVG")));
        assert!(!is_svg(Path::new("a.png")));
        assert!(!is_svg(Path::new("noext")));
    }

    #[test]
    fn test_legend_glyph_bar_and_marker() {
        let (bar, mark) = legend_glyph(&"r-*".parse().unwrap());
        assert_eq!(bar, LEGEND_BAR.to_vec());
        assert_eq!(mark.len(), 10);

        let (bar, mark) = legend_glyph(&"r--".parse().unwrap());
        assert_eq!((bar.len(), mark.len()), (4, 4));

        let (bar, mark) = legend_glyph(&"ro".parse().unwrap());
        assert_eq!((bar.len(), mark.len()), (16, 16));
    }
}
