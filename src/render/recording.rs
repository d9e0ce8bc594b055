use crate::error::Result;
use crate::render::figure::{Legend, LineSet};
use crate::render::style::FigureStyle;
use crate::render::Canvas;

/// One call received by a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Style(FigureStyle),
    Plot(Vec<LineSet>),
    Legend(Legend),
    XLabel(String),
    YLabel(String),
    Grid(bool),
    Show,
}

/// Canvas that draws nothing and remembers every call, in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&CanvasCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn apply_style(&mut self, style: &FigureStyle) -> Result<()> {
        self.calls.push(CanvasCall::Style(style.clone()));
        Ok(())
    }

    fn plot(&mut self, lines: &[LineSet]) -> Result<()> {
        self.calls.push(CanvasCall::Plot(lines.to_vec()));
        Ok(())
    }

    fn legend(&mut self, legend: &Legend) -> Result<()> {
        self.calls.push(CanvasCall::Legend(legend.clone()));
        Ok(())
    }

    fn xlabel(&mut self, label: &str) -> Result<()> {
        self.calls.push(CanvasCall::XLabel(label.to_string()));
        Ok(())
    }

    fn ylabel(&mut self, label: &str) -> Result<()> {
        self.calls.push(CanvasCall::YLabel(label.to_string()));
        Ok(())
    }

    fn grid(&mut self, enabled: bool) -> Result<()> {
        self.calls.push(CanvasCall::Grid(enabled));
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.calls.push(CanvasCall::Show);
        Ok(())
    }
}
