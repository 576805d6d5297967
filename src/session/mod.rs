//! Decode session model
//!
//! A [`Session`] is created from an accepted [`DecodeResponse`] and lives
//! until the next successful submission replaces it. Apart from navigation
//! through its [`RevealController`] it is read-only.

pub mod reveal;

pub use reveal::RevealController;

use crate::error::ProtocolError;
use crate::types::{Bit, CandidatePath, DecodeResponse};

/// A validated engine response plus its navigation state
#[derive(Debug, Clone)]
pub struct Session {
    response: DecodeResponse,
    tail_start: usize,
    reveal: RevealController,
}

impl Session {
    /// Wrap a response, precomputing the tail boundary.
    ///
    /// Fails if the memory length exceeds the decoded length.
    pub fn accept(response: DecodeResponse) -> Result<Self, ProtocolError> {
        let tail_start = response.tail_start().ok_or_else(|| {
            ProtocolError::InvariantViolation(format!(
                "memory length {} exceeds decoded length {}",
                response.memory_length,
                response.decoded.len()
            ))
        })?;
        let reveal = RevealController::new(response.paths.len());

        tracing::info!(
            "Accepted decode session: {} candidate paths, tail starts at level {}",
            response.paths.len(),
            tail_start
        );

        Ok(Self {
            response,
            tail_start,
            reveal,
        })
    }

    pub fn encoded(&self) -> &[Bit] {
        &self.response.encoded
    }

    pub fn observed(&self) -> &[Bit] {
        &self.response.observed
    }

    pub fn decoded(&self) -> &[Bit] {
        &self.response.decoded
    }

    pub fn memory_length(&self) -> usize {
        self.response.memory_length
    }

    /// `decoded.len() - memory_length`
    pub fn tail_start(&self) -> usize {
        self.tail_start
    }

    pub fn paths(&self) -> &[CandidatePath] {
        &self.response.paths
    }

    pub fn revealed_count(&self) -> usize {
        self.reveal.revealed_count()
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn advance(&mut self) -> usize {
        self.reveal.advance()
    }

    pub fn retreat(&mut self) -> usize {
        self.reveal.retreat()
    }

    /// The first `revealed_count` candidates, in engine order
    pub fn visible_paths(&self) -> &[CandidatePath] {
        self.reveal.visible(&self.response.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One as I, Zero as O};

    fn response(memory_length: usize) -> DecodeResponse {
        DecodeResponse {
            encoded: vec![I, I, O, I],
            observed: vec![I, O, O, I],
            decoded: vec![I, O, O, O],
            memory_length,
            paths: vec![
                CandidatePath::new(vec![I, O, O, O], -1.0),
                CandidatePath::new(vec![O, O], -2.0),
            ],
        }
    }

    #[test]
    fn test_accept_computes_tail_start() {
        let session = Session::accept(response(2)).unwrap();
        assert_eq!(session.tail_start(), 2);
        assert_eq!(session.revealed_count(), 0);
        assert!(session.visible_paths().is_empty());
    }

    #[test]
    fn test_accept_rejects_negative_tail() {
        assert!(matches!(
            Session::accept(response(5)),
            Err(ProtocolError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_navigation_reveals_in_engine_order() {
        let mut session = Session::accept(response(2)).unwrap();
        session.advance();
        assert_eq!(session.visible_paths().len(), 1);
        assert_eq!(session.visible_paths()[0].metric, -1.0);
        session.advance();
        session.advance();
        assert_eq!(session.revealed_count(), 2);
        session.retreat();
        assert_eq!(session.visible_paths()[0].metric, -1.0);
        assert_eq!(session.visible_paths().len(), 1);
    }
}
