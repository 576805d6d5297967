//! Trellis layout engine
//!
//! Turns candidate paths into [`DrawInstruction`] sequences. Nothing in this
//! module knows about a GUI toolkit; see `frontend::canvas` for the egui
//! adapter.

pub mod draw;
pub mod layout;

pub use draw::{replay, segments, DrawInstruction, DrawTarget, Point};
pub use layout::{layout_path, required_canvas_width, TrellisGeometry};

use crate::session::Session;

/// Lay out every currently revealed candidate of a session, in reveal order.
pub fn layout_visible(session: &Session, geometry: &TrellisGeometry) -> Vec<Vec<DrawInstruction>> {
    session
        .visible_paths()
        .iter()
        .map(|path| geometry.layout_candidate(path, session.tail_start()))
        .collect()
}
