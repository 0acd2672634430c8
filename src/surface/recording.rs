//! Recording surface - remembers every call instead of drawing
//!
//! Useful as a spy in tests: it records the exact call sequence, tracks the
//! save/restore state stack, and reassembles the painted paths so geometry
//! can be checked without rasterizing anything.

use crate::geometry::{Color, Point};

use super::traits::Surface;

/// One call made on a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    SetSourceRgba(Color),
    SetLineWidth(f64),
    SetDash(Vec<f64>),
    NewPath,
    NewSubPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    Stroke,
    FillPreserve,
}

/// The graphics state covered by `save`/`restore`
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsState {
    pub color: Color,
    pub line_width: f64,
    pub dash: Vec<f64>,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1.0,
            dash: Vec::new(),
        }
    }
}

/// An arc recorded as part of a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintKind {
    Stroke,
    Fill,
}

/// A path as it was when it got stroked or filled
#[derive(Clone, Debug, PartialEq)]
pub struct PaintOp {
    pub kind: PaintKind,
    pub subpaths: Vec<Vec<Point>>,
    pub arcs: Vec<ArcSegment>,
    pub closed: bool,
    pub state: GraphicsState,
}

/// A [`Surface`] that records calls and reconstructs painted paths
#[derive(Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    subpaths: Vec<Vec<Point>>,
    arcs: Vec<ArcSegment>,
    closed: bool,
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in order
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Current graphics state
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    /// Number of `save` calls not yet matched by `restore`
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every stroke and fill, in order
    pub fn paint_ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn strokes(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops.iter().filter(|op| op.kind == PaintKind::Stroke)
    }

    pub fn fills(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops.iter().filter(|op| op.kind == PaintKind::Fill)
    }

    /// All polyline subpaths that were stroked, across every stroke
    pub fn stroked_subpaths(&self) -> Vec<Vec<Point>> {
        self.strokes().flat_map(|op| op.subpaths.iter().cloned()).collect()
    }

    /// All arcs that were stroked, across every stroke
    pub fn stroked_arcs(&self) -> Vec<ArcSegment> {
        self.strokes().flat_map(|op| op.arcs.iter().copied()).collect()
    }

    fn clear_path(&mut self) {
        self.subpaths.clear();
        self.arcs.clear();
        self.closed = false;
    }

    fn snapshot(&self, kind: PaintKind) -> PaintOp {
        PaintOp {
            kind,
            subpaths: self.subpaths.iter().filter(|s| !s.is_empty()).cloned().collect(),
            arcs: self.arcs.clone(),
            closed: self.closed,
            state: self.state.clone(),
        }
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.calls.push(SurfaceCall::Save);
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        self.calls.push(SurfaceCall::Restore);
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore() without matching save()"),
        }
    }

    fn set_source_rgba(&mut self, color: Color) {
        self.calls.push(SurfaceCall::SetSourceRgba(color));
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(SurfaceCall::SetLineWidth(width));
        self.state.line_width = width;
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.calls.push(SurfaceCall::SetDash(pattern.to_vec()));
        self.state.dash = pattern.to_vec();
    }

    fn new_path(&mut self) {
        self.calls.push(SurfaceCall::NewPath);
        self.clear_path();
    }

    fn new_sub_path(&mut self) {
        self.calls.push(SurfaceCall::NewSubPath);
    }

    fn move_to(&mut self, p: Point) {
        self.calls.push(SurfaceCall::MoveTo(p));
        self.subpaths.push(vec![p]);
    }

    fn line_to(&mut self, p: Point) {
        self.calls.push(SurfaceCall::LineTo(p));
        match self.subpaths.last_mut() {
            Some(current) => current.push(p),
            None => self.subpaths.push(vec![p]),
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(SurfaceCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self.arcs.push(ArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
        self.closed = true;
    }

    fn stroke(&mut self) {
        self.calls.push(SurfaceCall::Stroke);
        let op = self.snapshot(PaintKind::Stroke);
        self.ops.push(op);
        self.clear_path();
    }

    fn fill_preserve(&mut self) {
        self.calls.push(SurfaceCall::FillPreserve);
        let op = self.snapshot(PaintKind::Fill);
        self.ops.push(op);
    }
}
