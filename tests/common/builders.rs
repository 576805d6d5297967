//! Test data builders for creating test objects

use trellis_view::types::{Bit, CandidatePath, DecodeResponse};

/// Convert a `0`/`1` string literal into bits
pub fn bits(s: &str) -> Vec<Bit> {
    s.chars()
        .map(|c| Bit::from_char(c).expect("test bits must be 0 or 1"))
        .collect()
}

/// Builder for creating test engine responses
pub struct ResponseBuilder {
    decoded: Vec<Bit>,
    memory_length: usize,
    paths: Vec<CandidatePath>,
}

impl ResponseBuilder {
    pub fn new(decoded: &str) -> Self {
        Self {
            decoded: bits(decoded),
            memory_length: 0,
            paths: Vec::new(),
        }
    }

    pub fn memory_length(mut self, m: usize) -> Self {
        self.memory_length = m;
        self
    }

    pub fn path(mut self, branches: &str, metric: f64) -> Self {
        self.paths.push(CandidatePath::new(bits(branches), metric));
        self
    }

    pub fn build(self) -> DecodeResponse {
        DecodeResponse {
            encoded: self.decoded.repeat(2),
            observed: self.decoded.repeat(2),
            decoded: self.decoded,
            memory_length: self.memory_length,
            paths: self.paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_builder() {
        let response = ResponseBuilder::new("1011")
            .memory_length(2)
            .path("1011", -1.0)
            .build();

        assert_eq!(response.decoded.len(), 4);
        assert_eq!(response.encoded.len(), 8);
        assert_eq!(response.tail_start(), Some(2));
        assert_eq!(response.paths.len(), 1);
    }
}
