//! egui painter adapter for trellis draw instructions

use crate::trellis::{replay, DrawInstruction, DrawTarget, Point};
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

/// Colors cycled through by candidate rank
const PATH_COLORS: [Color32; 6] = [
    Color32::from_rgb(100, 149, 237), // Cornflower blue
    Color32::from_rgb(255, 99, 71),   // Tomato red
    Color32::from_rgb(50, 205, 50),   // Lime green
    Color32::from_rgb(255, 215, 0),   // Gold
    Color32::from_rgb(186, 85, 211),  // Orchid
    Color32::from_rgb(64, 224, 208),  // Turquoise
];

pub fn path_color(rank: usize) -> Color32 {
    PATH_COLORS[rank % PATH_COLORS.len()]
}

/// Paints draw instructions onto an egui [`Painter`], offset by `origin`.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
    color: Color32,
    label_color: Color32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, color: Color32, label_color: Color32) -> Self {
        Self {
            painter,
            origin,
            color,
            label_color,
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32,
            self.origin.y + point.y as f32,
        )
    }

    pub fn paint(&mut self, instructions: &[DrawInstruction]) {
        replay(instructions, self);
    }
}

impl DrawTarget for EguiCanvas<'_> {
    fn line(&mut self, from: Point, to: Point) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(1.5, self.color),
        );
    }

    fn marker(&mut self, center: Point, radius: f64) {
        self.painter
            .circle_filled(self.to_screen(center), radius as f32, self.color);
    }

    fn label(&mut self, anchor: Point, text: &str) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::LEFT_BOTTOM,
            text,
            FontId::monospace(12.0),
            self.label_color,
        );
    }
}
