//! Axis ranges, legend placement and label area sizing.
//!
//! Pure functions of the data and style, so a canvas can stay a thin
//! translation layer over its drawing backend.

use log::debug;

use crate::render::figure::{LegendLoc, LineSet};
use crate::render::style::FigureStyle;

/// Fraction of the data span added on each side of an axis.
pub const MARGIN: f64 = 0.05;

/// Largest magnitude an axis end may take. Beyond this the span, and the
/// tick spacing plotters derives from it, stop being finite.
pub const AXIS_LIMIT: f64 = 1e300;

/// Fraction of each axis that counts as a legend corner region.
const CORNER: f64 = 0.3;

/// Axis ranges, `(min, max)` per axis, already padded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Padded bounds over every finite point of every line.
///
/// Each axis gets [`MARGIN`] of its span on both sides. A zero span (one
/// point, or a flat line) is widened by 5% of the value's magnitude, or
/// by 0.5 when the value is zero, so the range is never empty.
///
/// Extremes are clamped to [`AXIS_LIMIT`] first, so the padded range and
/// its span are always finite.
///
/// Returns `None` when there are no finite points at all.
pub fn data_bounds(lines: &[LineSet]) -> Option<Bounds> {
    let mut pts = lines
        .iter()
        .flat_map(|l| l.points.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    let &(x0, y0) = pts.next()?;
    let (mut xmin, mut xmax, mut ymin, mut ymax) = (x0, x0, y0, y0);
    for &(x, y) in pts {
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }

    Some(Bounds {
        x: pad(xmin, xmax),
        y: pad(ymin, ymax),
    })
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let lo = clamp_axis(lo);
    let hi = clamp_axis(hi);
    let span = hi - lo;
    if span > 0.0 {
        return (lo - span * MARGIN, hi + span * MARGIN);
    }
    let w = if lo == 0.0 { 0.5 } else { lo.abs() * MARGIN };
    (lo - w, hi + w)
}

/// Clamp a coordinate into `-AXIS_LIMIT..=AXIS_LIMIT`.
pub fn clamp_axis(v: f64) -> f64 {
    v.clamp(-AXIS_LIMIT, AXIS_LIMIT)
}

/// Split a line at non-finite points into runs of finite ones.
///
/// A `nan` or infinite row breaks the line instead of being bridged.
/// Empty runs are dropped.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    points
        .split(|(x, y)| !(x.is_finite() && y.is_finite()))
        .filter(|run| !run.is_empty())
        .map(|run| run.to_vec())
        .collect()
}

/// Corner of the axes that overlaps the fewest data points.
///
/// A corner region is the outer [`CORNER`] fraction of both axes. Ties go
/// to the first of upper-right, upper-left, lower-left, lower-right.
pub fn best_legend_corner(lines: &[LineSet], bounds: &Bounds) -> LegendLoc {
    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;
    let xl = x0 + (x1 - x0) * CORNER;
    let xr = x1 - (x1 - x0) * CORNER;
    let yb = y0 + (y1 - y0) * CORNER;
    let yt = y1 - (y1 - y0) * CORNER;

    let mut counts = [0usize; 4];
    for &(x, y) in lines.iter().flat_map(|l| l.points.iter()) {
        let right = x >= xr;
        let left = x <= xl;
        let top = y >= yt;
        let bottom = y <= yb;
        if top && right {
            counts[0] += 1;
        }
        if top && left {
            counts[1] += 1;
        }
        if bottom && left {
            counts[2] += 1;
        }
        if bottom && right {
            counts[3] += 1;
        }
    }

    const ORDER: [LegendLoc; 4] = [
        LegendLoc::UpperRight,
        LegendLoc::UpperLeft,
        LegendLoc::LowerLeft,
        LegendLoc::LowerRight,
    ];
    let mut best = 0;
    for i in 1..4 {
        if counts[i] < counts[best] {
            best = i;
        }
    }

    debug!("legend corner counts {:?}, picked {:?}", counts, ORDER[best]);
    ORDER[best]
}

/// Turn [`LegendLoc::Best`] into a concrete corner; others pass through.
pub fn resolve_legend_loc(loc: LegendLoc, lines: &[LineSet], bounds: &Bounds) -> LegendLoc {
    match loc {
        LegendLoc::Best => best_legend_corner(lines, bounds),
        fixed => fixed,
    }
}

/// Pixel sizes of the x (bottom) and y (left) label areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAreas {
    pub x: u32,
    pub y: u32,
}

/// Label areas fitted to the font and the widest y tick label.
///
/// Without autolayout the sizes are fixed and long tick labels may clip.
pub fn label_area_sizes(style: &FigureStyle, bounds: &Bounds) -> LabelAreas {
    if !style.autolayout {
        return LabelAreas { x: 40, y: 60 };
    }

    let fs = style.font_size;
    let widest = [bounds.y.0, bounds.y.1]
        .iter()
        .map(|v| tick_label_chars(*v))
        .max()
        .unwrap_or(1) as u32;

    // tick labels + axis description + tick marks and padding
    LabelAreas {
        x: fs * 3 + 10,
        y: widest * fs * 3 / 5 + fs * 2 + 10,
    }
}

fn tick_label_chars(v: f64) -> usize {
    let magnitude = if v.abs() >= 1.0 {
        v.abs().log10().floor() as usize + 1
    } else {
        1
    };
    // sign, decimal point, one fractional digit
    magnitude + usize::from(v < 0.0) + 2
}
