//! Core data types for trellis-view
//!
//! This module defines the records exchanged with the decoding engine and
//! held by a decode session:
//!
//! - [`Bit`] - A single binary decision or code symbol
//! - [`DecodeRequest`] - What the user submits to the engine
//! - [`DecodeResponse`] - What the engine reports back
//! - [`CandidatePath`] - One ranked root-to-leaf path through the trellis
//!
//! All records are plain data. Validation happens once at the protocol
//! boundary (see [`crate::protocol`]) and in [`crate::input`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single binary value. Serialized as the JSON integers `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Parse a bit from its character form
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Character form of this bit
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> u8 {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(format!("expected 0 or 1, got {}", other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered bit sequence, earliest bit first.
pub type BitSequence = Vec<Bit>;

/// Render a bit sequence as a compact `0`/`1` string
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

/// A request for the external decoding engine
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeRequest {
    /// The received (noisy) sequence to decode
    pub observed: BitSequence,
    /// Generator polynomials, one row per output stream
    pub generators: Vec<BitSequence>,
    /// Channel error probability, `0 < p < 1`
    pub error_probability: f64,
}

/// A candidate decode path proposed by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePath {
    /// Root-to-leaf decisions taken through the trellis
    pub branches: BitSequence,
    /// Path metric (mu); display-only
    pub metric: f64,
}

impl CandidatePath {
    pub fn new(branches: BitSequence, metric: f64) -> Self {
        Self { branches, metric }
    }

    /// Number of trellis levels this path spans
    pub fn depth(&self) -> usize {
        self.branches.len()
    }
}

/// A validated response from the decoding engine
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResponse {
    pub encoded: BitSequence,
    pub observed: BitSequence,
    pub decoded: BitSequence,
    /// Number of trailing decoded bits that form the traceback tail
    pub memory_length: usize,
    /// Candidates in engine ranking order (best first)
    pub paths: Vec<CandidatePath>,
}

impl DecodeResponse {
    /// First trellis level that belongs to the forced tail, or `None` if the
    /// memory length exceeds the decoded length.
    pub fn tail_start(&self) -> Option<usize> {
        self.decoded.len().checked_sub(self.memory_length)
    }
}
