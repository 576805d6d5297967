//! Trellis path geometry
//!
//! A candidate path is drawn left to right, one level per `step_length`.
//! Each level deflects the path up (bit 0) or down (bit 1) by an amplitude
//! that halves at every level, starting from half the canvas height. Levels
//! past the tail boundary are drawn flat: those bits are forced by the
//! traceback rather than chosen.

use super::draw::DrawInstruction;
use crate::types::{Bit, CandidatePath};

/// Default radius of the decision-node markers
pub const DEFAULT_MARKER_RADIUS: f64 = 3.0;

/// Default vertical distance between the final node and the metric label
pub const DEFAULT_LABEL_OFFSET: f64 = 8.0;

/// Layout parameters shared by every path of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrellisGeometry {
    /// Half of the canvas height; also the starting y and amplitude
    pub canvas_half_height: f64,
    /// Horizontal distance between trellis levels
    pub step_length: f64,
    pub marker_radius: f64,
    pub label_offset: f64,
}

impl TrellisGeometry {
    pub fn new(canvas_half_height: f64, step_length: f64) -> Self {
        Self {
            canvas_half_height,
            step_length,
            marker_radius: DEFAULT_MARKER_RADIUS,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }

    /// Lay out one candidate path.
    ///
    /// `tail_start` is the last level that is still a free choice; every
    /// level above it is drawn flat. The result depends only on the
    /// arguments and `self`.
    pub fn layout_path(&self, branches: &[Bit], tail_start: usize, metric: f64) -> Vec<DrawInstruction> {
        let mut instructions = Vec::with_capacity(branches.len() * 3 + 1);
        let (mut x, mut y) = (0.0, self.canvas_half_height);
        let mut amplitude = self.canvas_half_height;

        for (i, bit) in branches.iter().enumerate() {
            let level = i + 1;
            instructions.push(DrawInstruction::CircleMarker {
                x,
                y,
                radius: self.marker_radius,
            });

            amplitude /= 2.0;
            let dy = if level > tail_start {
                0.0
            } else {
                match bit {
                    Bit::Zero => -amplitude,
                    Bit::One => amplitude,
                }
            };

            instructions.push(DrawInstruction::MoveTo { x, y });
            instructions.push(DrawInstruction::LineTo {
                dx: self.step_length,
                dy,
            });
            x += self.step_length;
            y += dy;
        }

        instructions.push(DrawInstruction::TextLabel {
            x,
            y: y - self.label_offset,
            text: format!("{:.2}", metric),
        });
        instructions
    }

    /// Lay out a candidate path record
    pub fn layout_candidate(&self, path: &CandidatePath, tail_start: usize) -> Vec<DrawInstruction> {
        self.layout_path(&path.branches, tail_start, path.metric)
    }
}

/// Lay out one candidate path with the default marker radius and label offset.
pub fn layout_path(
    branches: &[Bit],
    tail_start: usize,
    metric: f64,
    canvas_half_height: f64,
    step_length: f64,
) -> Vec<DrawInstruction> {
    TrellisGeometry::new(canvas_half_height, step_length).layout_path(branches, tail_start, metric)
}

/// Canvas width needed so the longest path is not clipped.
pub fn required_canvas_width(paths: &[CandidatePath], step_length: f64, margin: f64) -> f64 {
    let longest = paths.iter().map(CandidatePath::depth).max().unwrap_or(0);
    margin + step_length * longest as f64
}
