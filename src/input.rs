//! Parsing and validation of user-entered form fields
//!
//! Everything here runs before the engine is invoked. A form that fails to
//! parse never reaches the process bridge.

use crate::error::InputValidationError;
use crate::types::{Bit, BitSequence, DecodeRequest};

/// Parse a binary string such as `"00010001"`.
///
/// Surrounding whitespace is ignored; any other character that is not `0`
/// or `1` is rejected.
pub fn parse_bits(input: &str) -> Result<BitSequence, InputValidationError> {
    parse_labelled_bits(input, "sequence")
}

/// Parse comma-separated generator rows such as `"101,110"`.
pub fn parse_generators(input: &str) -> Result<Vec<BitSequence>, InputValidationError> {
    if input.trim().is_empty() {
        return Err(InputValidationError::Empty {
            field: "generators".to_string(),
        });
    }

    input
        .split(',')
        .enumerate()
        .map(|(i, row)| parse_labelled_bits(row, &format!("generator {}", i + 1)))
        .collect()
}

/// Parse an error probability, requiring `0 < p < 1`.
pub fn parse_probability(input: &str) -> Result<f64, InputValidationError> {
    let trimmed = input.trim();
    let p: f64 = trimmed
        .parse()
        .map_err(|_| InputValidationError::InvalidProbability(trimmed.to_string()))?;
    check_probability(p)?;
    Ok(p)
}

fn check_probability(p: f64) -> Result<(), InputValidationError> {
    // NaN fails both comparisons
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(InputValidationError::ProbabilityOutOfRange(p))
    }
}

/// Positions in errors are character indices into `input` as typed,
/// including any leading whitespace.
fn parse_labelled_bits(input: &str, field: &str) -> Result<BitSequence, InputValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputValidationError::Empty {
            field: field.to_string(),
        });
    }
    let leading = input.chars().count() - input.trim_start().chars().count();

    trimmed
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Bit::from_char(c).ok_or_else(|| InputValidationError::NonBinary {
                field: field.to_string(),
                position: leading + i,
                found: c,
            })
        })
        .collect()
}

impl DecodeRequest {
    /// Check the request invariants: non-empty observed sequence, at least
    /// one non-empty generator, and `0 < p < 1`.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        if self.observed.is_empty() {
            return Err(InputValidationError::Empty {
                field: "observed".to_string(),
            });
        }
        if self.generators.is_empty() {
            return Err(InputValidationError::Empty {
                field: "generators".to_string(),
            });
        }
        if let Some(i) = self.generators.iter().position(|g| g.is_empty()) {
            return Err(InputValidationError::Empty {
                field: format!("generator {}", i + 1),
            });
        }
        check_probability(self.error_probability)
    }
}

/// Raw text of the submission form
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeForm {
    pub observed: String,
    pub generators: String,
    pub probability: String,
}

impl DecodeForm {
    pub fn new(
        observed: impl Into<String>,
        generators: impl Into<String>,
        probability: impl Into<String>,
    ) -> Self {
        Self {
            observed: observed.into(),
            generators: generators.into(),
            probability: probability.into(),
        }
    }

    /// Parse all three fields into a request, stopping at the first error
    pub fn to_request(&self) -> Result<DecodeRequest, InputValidationError> {
        let request = DecodeRequest {
            observed: parse_labelled_bits(&self.observed, "observed")?,
            generators: parse_generators(&self.generators)?,
            error_probability: parse_probability(&self.probability)?,
        };
        request.validate()?;
        Ok(request)
    }
}
