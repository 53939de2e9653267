// Shared test doubles: a canvas that records every call and a scheduler that
// hands out sequential handles.

#![allow(dead_code)]

use stellar_core::{Canvas, FrameScheduler, Paint, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { x: f64, y: f64, radius: f64 },
    SetFill(Paint),
    SetStroke(Paint),
    LineWidth(f64),
    Fill,
    Stroke,
    FillRect(f64, f64, f64, f64),
}

pub struct RecordingCanvas {
    pub size: Size,
    pub ops: Vec<Op>,
    pub depth: i32,
    pub max_depth: i32,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn strokes(&self) -> usize {
        self.count(|op| matches!(op, Op::Stroke))
    }

    pub fn fills(&self) -> usize {
        self.count(|op| matches!(op, Op::Fill))
    }

    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc { x, y, radius } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn has_radial_fill(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, Op::SetFill(Paint::Radial(_))))
    }

    pub fn has_linear_stroke(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, Op::SetStroke(Paint::Linear(_))))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.depth -= 1;
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(Op::Scale(sx, sy));
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.ops.push(Op::Arc { x, y, radius });
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.ops.push(Op::SetFill(paint.clone()));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.ops.push(Op::SetStroke(paint.clone()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::FillRect(x, y, width, height));
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    pub next_id: u32,
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
}

impl ManualScheduler {
    /// Handles requested but neither cancelled nor consumed yet.
    pub fn outstanding(&self, consumed: &[u32]) -> Vec<u32> {
        self.requested
            .iter()
            .copied()
            .filter(|h| !self.cancelled.contains(h) && !consumed.contains(h))
            .collect()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.next_id += 1;
        self.requested.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}
