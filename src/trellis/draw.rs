//! Toolkit-independent drawing instructions
//!
//! The layout engine only ever produces [`DrawInstruction`]s. Any surface
//! that implements [`DrawTarget`] can consume them through [`replay`].

/// A single abstract drawing step.
///
/// `LineTo` is relative to the pen position established by the previous
/// `MoveTo`/`LineTo`. `CircleMarker` and `TextLabel` use absolute
/// coordinates and leave the pen where it was.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    MoveTo { x: f64, y: f64 },
    LineTo { dx: f64, dy: f64 },
    CircleMarker { x: f64, y: f64, radius: f64 },
    TextLabel { x: f64, y: f64, text: String },
}

/// A point in layout coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rendering surface for draw instructions, in absolute coordinates.
pub trait DrawTarget {
    fn line(&mut self, from: Point, to: Point);
    fn marker(&mut self, center: Point, radius: f64);
    fn label(&mut self, anchor: Point, text: &str);
}

/// Feed an instruction sequence into a drawing surface, resolving relative
/// moves into absolute segments.
pub fn replay<T: DrawTarget + ?Sized>(instructions: &[DrawInstruction], target: &mut T) {
    let mut pen = Point::new(0.0, 0.0);
    for instruction in instructions {
        match instruction {
            DrawInstruction::MoveTo { x, y } => pen = Point::new(*x, *y),
            DrawInstruction::LineTo { dx, dy } => {
                let to = Point::new(pen.x + dx, pen.y + dy);
                target.line(pen, to);
                pen = to;
            }
            DrawInstruction::CircleMarker { x, y, radius } => {
                target.marker(Point::new(*x, *y), *radius)
            }
            DrawInstruction::TextLabel { x, y, text } => target.label(Point::new(*x, *y), text),
        }
    }
}

/// Collects absolute line segments, ignoring markers and labels
#[derive(Debug, Default)]
struct SegmentCollector {
    segments: Vec<(Point, Point)>,
}

impl DrawTarget for SegmentCollector {
    fn line(&mut self, from: Point, to: Point) {
        self.segments.push((from, to));
    }

    fn marker(&mut self, _center: Point, _radius: f64) {}

    fn label(&mut self, _anchor: Point, _text: &str) {}
}

/// Resolve an instruction sequence into absolute `(from, to)` segments
pub fn segments(instructions: &[DrawInstruction]) -> Vec<(Point, Point)> {
    let mut collector = SegmentCollector::default();
    replay(instructions, &mut collector);
    collector.segments
}
