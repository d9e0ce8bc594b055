//! Line styles and figure-wide style settings.
//!
//! Line styles use the compact format strings plot scripts are written
//! with: `"k-o"` is a black solid line with circle markers, `"r--"` a red
//! dashed line, `"b*"` blue stars with no line.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::PlotError;

/// Single-letter color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl Color {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'r' => Some(Self::Red),
            'c' => Some(Self::Cyan),
            'm' => Some(Self::Magenta),
            'y' => Some(Self::Yellow),
            'k' => Some(Self::Black),
            'w' => Some(Self::White),
            _ => None,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 128, 0),
            Self::Red => (255, 0, 0),
            Self::Cyan => (0, 191, 191),
            Self::Magenta => (191, 0, 191),
            Self::Yellow => (191, 191, 0),
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// Markers only
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Hexagon,
    Star,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Point,
}

impl Marker {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Circle),
            'h' => Some(Self::Hexagon),
            '*' => Some(Self::Star),
            's' => Some(Self::Square),
            '^' => Some(Self::TriangleUp),
            'v' => Some(Self::TriangleDown),
            'D' => Some(Self::Diamond),
            '+' => Some(Self::Plus),
            'x' => Some(Self::Cross),
            '.' => Some(Self::Point),
            _ => None,
        }
    }

    /// Marker outline as polygon vertices around (0, 0), in pixels.
    ///
    /// `radius` is the distance from the centre to the outermost vertex.
    /// Returns an empty outline for [`Marker::None`].
    pub fn outline(self, radius: i32) -> Vec<(i32, i32)> {
        let r = radius as f64;
        match self {
            Self::None => Vec::new(),
            Self::Circle => regular_polygon(16, r, 0.0),
            Self::Point => regular_polygon(12, r / 2.0, 0.0),
            Self::Hexagon => regular_polygon(6, r, PI / 2.0),
            Self::Square => regular_polygon(4, r, PI / 4.0),
            Self::Diamond => regular_polygon(4, r, 0.0),
            Self::TriangleUp => regular_polygon(3, r, PI / 2.0),
            Self::TriangleDown => regular_polygon(3, r, -PI / 2.0),
            Self::Star => star(5, r, r * 0.4),
            Self::Plus => bar_cross(r, 0.0),
            Self::Cross => bar_cross(r, PI / 4.0),
        }
    }
}

// Screen y grows downward, so angles are negated to keep "up" up.
fn to_pixel(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, (-y).round() as i32)
}

fn regular_polygon(n: usize, r: f64, start: f64) -> Vec<(i32, i32)> {
    (0..n)
        .map(|i| {
            let a = start + 2.0 * PI * i as f64 / n as f64;
            to_pixel(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn star(points: usize, outer: f64, inner: f64) -> Vec<(i32, i32)> {
    (0..points * 2)
        .map(|i| {
            let a = PI / 2.0 + PI * i as f64 / points as f64;
            let r = if i % 2 == 0 { outer } else { inner };
            to_pixel(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn bar_cross(r: f64, rot: f64) -> Vec<(i32, i32)> {
    let w = (r / 4.0).max(1.0);
    let arm = [
        (w, w),
        (r, w),
        (r, -w),
        (w, -w),
        (w, -r),
        (-w, -r),
        (-w, -w),
        (-r, -w),
        (-r, w),
        (-w, w),
        (-w, r),
        (w, r),
    ];
    let (s, c) = rot.sin_cos();
    arm.iter()
        .map(|&(x, y)| to_pixel(x * c - y * s, x * s + y * c))
        .collect()
}

/// Color, line and marker for one plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: Color,
    pub line: LineKind,
    pub marker: Marker,
}

impl LineStyle {
    pub fn new(color: Color, line: LineKind, marker: Marker) -> Self {
        Self {
            color,
            line,
            marker,
        }
    }
}

impl FromStr for LineStyle {
    type Err = PlotError;

    /// Parse `[color][line][marker]`, parts in any order, each at most once.
    ///
    /// Missing color defaults to blue. With neither a line nor a marker the
    /// line is solid; a marker on its own means no connecting line.
    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        let bad = || PlotError::BadStyle(fmt.to_string());

        let mut color = None;
        let mut line = None;
        let mut marker = None;

        let chars: Vec<char> = fmt.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            let (kind, width) = match (c, next) {
                ('-', Some('-')) => (Some(LineKind::Dashed), 2),
                ('-', Some('.')) => (Some(LineKind::DashDot), 2),
                ('-', _) => (Some(LineKind::Solid), 1),
                (':', _) => (Some(LineKind::Dotted), 1),
                _ => (None, 1),
            };

            if let Some(kind) = kind {
                if line.replace(kind).is_some() {
                    return Err(bad());
                }
            } else if let Some(m) = Marker::from_code(c) {
                if marker.replace(m).is_some() {
                    return Err(bad());
                }
            } else if let Some(col) = Color::from_code(c) {
                if color.replace(col).is_some() {
                    return Err(bad());
                }
            } else {
                return Err(bad());
            }
            i += width;
        }

        let line = match (line, marker) {
            (Some(l), _) => l,
            (None, Some(_)) => LineKind::None,
            (None, None) => LineKind::Solid,
        };

        Ok(LineStyle {
            color: color.unwrap_or(Color::Blue),
            line,
            marker: marker.unwrap_or(Marker::None),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDirection {
    In,
    Out,
}

/// Settings that apply to the whole figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub font_family: String,
    pub font_size: u32,
    pub tick_direction: TickDirection,
    /// Size label areas to fit tick labels instead of using fixed margins.
    pub autolayout: bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            font_size: 16,
            tick_direction: TickDirection::Out,
            autolayout: true,
        }
    }
}
