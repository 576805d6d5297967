//! Wire protocol with the external decoding engine
//!
//! One compact JSON document per direction, exchanged over the engine's
//! standard streams:
//!
//! ```text
//! request:  {"xs":[0,1,..],"gs":[[1,0,1],..],"p":0.1}
//! response: {"encoded":[..],"observed":[..],"decoded":[..],"m":2,
//!            "paths":[{"path":[..],"mu":-3.5},..]}
//! ```
//!
//! Responses are walked as a [`serde_json::Value`] rather than derived, so
//! that every structural problem maps onto a specific [`ProtocolError`]
//! naming the offending field.

use crate::error::ProtocolError;
use crate::types::{Bit, BitSequence, CandidatePath, DecodeRequest, DecodeResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize)]
struct RequestDocument {
    xs: BitSequence,
    gs: Vec<BitSequence>,
    p: f64,
}

#[derive(Debug, Serialize)]
struct ResponseDocument<'a> {
    encoded: &'a [Bit],
    observed: &'a [Bit],
    decoded: &'a [Bit],
    m: usize,
    paths: Vec<PathDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct PathDocument<'a> {
    path: &'a [Bit],
    mu: f64,
}

/// Serialize a request into the engine's input document.
pub fn encode_request(request: &DecodeRequest) -> Result<Vec<u8>, ProtocolError> {
    request
        .validate()
        .map_err(|e| ProtocolError::Encoding(e.to_string()))?;

    let document = RequestDocument {
        xs: request.observed.clone(),
        gs: request.generators.clone(),
        p: request.error_probability,
    };
    serde_json::to_vec(&document).map_err(|e| ProtocolError::Encoding(e.to_string()))
}

/// Parse a request document (the engine's side of the exchange).
pub fn decode_request(bytes: &[u8]) -> Result<DecodeRequest, ProtocolError> {
    let document: RequestDocument = serde_json::from_slice(bytes)?;
    let request = DecodeRequest {
        observed: document.xs,
        generators: document.gs,
        error_probability: document.p,
    };
    request
        .validate()
        .map_err(|e| ProtocolError::InvariantViolation(e.to_string()))?;
    Ok(request)
}

/// Serialize a response document (the engine's side of the exchange).
pub fn encode_response(response: &DecodeResponse) -> Result<Vec<u8>, ProtocolError> {
    let document = ResponseDocument {
        encoded: &response.encoded,
        observed: &response.observed,
        decoded: &response.decoded,
        m: response.memory_length,
        paths: response
            .paths
            .iter()
            .map(|p| PathDocument {
                path: &p.branches,
                mu: p.metric,
            })
            .collect(),
    };
    serde_json::to_vec(&document).map_err(|e| ProtocolError::Encoding(e.to_string()))
}

/// Parse and validate the engine's output document.
///
/// An empty `paths` array is valid and means no candidates were found.
pub fn decode_response(bytes: &[u8]) -> Result<DecodeResponse, ProtocolError> {
    let document: Value = serde_json::from_slice(bytes)?;
    let object = document
        .as_object()
        .ok_or_else(|| type_mismatch("<document>", "object"))?;

    let encoded = bits(required(object, "encoded", "")?, "encoded")?;
    let observed = bits(required(object, "observed", "")?, "observed")?;
    let decoded = bits(required(object, "decoded", "")?, "decoded")?;
    let memory_length = memory_length(required(object, "m", "")?)?;

    if memory_length > decoded.len() {
        return Err(ProtocolError::InvariantViolation(format!(
            "memory length {} exceeds decoded length {}",
            memory_length,
            decoded.len()
        )));
    }

    let paths = required(object, "paths", "")?
        .as_array()
        .ok_or_else(|| type_mismatch("paths", "array"))?
        .iter()
        .enumerate()
        .map(|(i, entry)| candidate_path(entry, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodeResponse {
        encoded,
        observed,
        decoded,
        memory_length,
        paths,
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    prefix: &str,
) -> Result<&'a Value, ProtocolError> {
    object
        .get(name)
        .ok_or_else(|| ProtocolError::MissingField(format!("{}{}", prefix, name)))
}

fn type_mismatch(field: impl Into<String>, expected: &'static str) -> ProtocolError {
    ProtocolError::TypeMismatch {
        field: field.into(),
        expected,
    }
}

fn bits(value: &Value, field: &str) -> Result<BitSequence, ProtocolError> {
    let items = value
        .as_array()
        .ok_or_else(|| type_mismatch(field, "array of bits"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Number(number) = item else {
                return Err(type_mismatch(format!("{}[{}]", field, index), "bit (0 or 1)"));
            };
            match number.as_u64() {
                Some(0) => Ok(Bit::Zero),
                Some(1) => Ok(Bit::One),
                _ if number.is_f64() => {
                    Err(type_mismatch(format!("{}[{}]", field, index), "bit (0 or 1)"))
                }
                _ => Err(ProtocolError::InvalidBit {
                    field: field.to_string(),
                    index,
                    value: number.clone(),
                }),
            }
        })
        .collect()
}

fn memory_length(value: &Value) -> Result<usize, ProtocolError> {
    if let Some(m) = value.as_u64() {
        return usize::try_from(m).map_err(|_| {
            ProtocolError::InvariantViolation(format!("memory length {} is out of range", m))
        });
    }
    match value.as_i64() {
        Some(m) => Err(ProtocolError::InvariantViolation(format!(
            "memory length {} is negative",
            m
        ))),
        None => Err(type_mismatch("m", "non-negative integer")),
    }
}

fn candidate_path(entry: &Value, index: usize) -> Result<CandidatePath, ProtocolError> {
    let prefix = format!("paths[{}].", index);
    let object = entry
        .as_object()
        .ok_or_else(|| type_mismatch(format!("paths[{}]", index), "object"))?;

    let branches = bits(
        required(object, "path", &prefix)?,
        &format!("{}path", prefix),
    )?;
    let metric = required(object, "mu", &prefix)?
        .as_f64()
        .ok_or_else(|| type_mismatch(format!("{}mu", prefix), "number"))?;

    Ok(CandidatePath { branches, metric })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One as I, Zero as O};

    const VALID: &str = r#"{
        "encoded": [1,1,0,1,0,0],
        "observed": [1,0,0,1,0,0],
        "decoded": [1,0,0],
        "m": 2,
        "paths": [
            {"path": [1,0,0], "mu": -1.25},
            {"path": [0,1], "mu": -4.5}
        ]
    }"#;

    fn with_field(name: &str, value: Value) -> Vec<u8> {
        let mut document: Value = serde_json::from_str(VALID).unwrap();
        document[name] = value;
        serde_json::to_vec(&document).unwrap()
    }

    fn without_field(name: &str) -> Vec<u8> {
        let mut document: Value = serde_json::from_str(VALID).unwrap();
        document.as_object_mut().unwrap().remove(name);
        serde_json::to_vec(&document).unwrap()
    }

    #[test]
    fn test_encode_request_field_names() {
        let request = DecodeRequest {
            observed: vec![O, I],
            generators: vec![vec![I, O, I]],
            error_probability: 0.1,
        };
        let bytes = encode_request(&request).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"xs":[0,1],"gs":[[1,0,1]],"p":0.1}"#
        );
    }

    #[test]
    fn test_encode_request_rejects_invalid() {
        let request = DecodeRequest {
            observed: vec![O, I],
            generators: vec![vec![I]],
            error_probability: 1.0,
        };
        assert!(matches!(
            encode_request(&request),
            Err(ProtocolError::Encoding(_))
        ));
    }

    #[test]
    fn test_decode_valid_response() {
        let response = decode_response(VALID.as_bytes()).unwrap();
        assert_eq!(response.decoded, vec![I, O, O]);
        assert_eq!(response.memory_length, 2);
        assert_eq!(response.paths.len(), 2);
        assert_eq!(response.paths[0].branches, vec![I, O, O]);
        assert_eq!(response.paths[1].metric, -4.5);
        assert_eq!(response.tail_start(), Some(1));
    }

    #[test]
    fn test_decode_empty_paths_is_valid() {
        let response = decode_response(&with_field("paths", Value::Array(vec![]))).unwrap();
        assert!(response.paths.is_empty());
    }

    #[test]
    fn test_decode_missing_field() {
        for name in ["encoded", "observed", "decoded", "m", "paths"] {
            match decode_response(&without_field(name)) {
                Err(ProtocolError::MissingField(field)) => assert_eq!(field, name),
                other => panic!("expected MissingField({}), got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_decode_missing_path_metric() {
        let bytes = with_field("paths", serde_json::json!([{"path": [0, 1]}]));
        match decode_response(&bytes) {
            Err(ProtocolError::MissingField(field)) => assert_eq!(field, "paths[0].mu"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_type_mismatch() {
        let bytes = with_field("decoded", serde_json::json!("100"));
        assert!(matches!(
            decode_response(&bytes),
            Err(ProtocolError::TypeMismatch { ref field, .. }) if field == "decoded"
        ));

        let bytes = with_field("m", serde_json::json!(1.5));
        assert!(matches!(
            decode_response(&bytes),
            Err(ProtocolError::TypeMismatch { ref field, .. }) if field == "m"
        ));

        let bytes = with_field("paths", serde_json::json!([{"path": [0], "mu": "high"}]));
        assert!(matches!(
            decode_response(&bytes),
            Err(ProtocolError::TypeMismatch { ref field, .. }) if field == "paths[0].mu"
        ));
    }

    #[test]
    fn test_decode_negative_memory_length() {
        let bytes = with_field("m", serde_json::json!(-1));
        assert!(matches!(
            decode_response(&bytes),
            Err(ProtocolError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_decode_negative_tail_start() {
        let bytes = with_field("m", serde_json::json!(4));
        assert!(matches!(
            decode_response(&bytes),
            Err(ProtocolError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_decode_memory_length_equal_to_decoded_is_valid() {
        let response = decode_response(&with_field("m", serde_json::json!(3))).unwrap();
        assert_eq!(response.tail_start(), Some(0));
    }

    #[test]
    fn test_decode_invalid_branch_bit() {
        let bytes = with_field("paths", serde_json::json!([{"path": [0, 1, 2], "mu": 0.0}]));
        match decode_response(&bytes) {
            Err(ProtocolError::InvalidBit { field, index, value }) => {
                assert_eq!(field, "paths[0].path");
                assert_eq!(index, 2);
                assert_eq!(value.as_u64(), Some(2));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_response(b"thread 'main' panicked"),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            decode_response(b"[1, 2]"),
            Err(ProtocolError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_response_encoding_round_trips() {
        let response = decode_response(VALID.as_bytes()).unwrap();
        let bytes = encode_response(&response).unwrap();
        assert_eq!(decode_response(&bytes).unwrap(), response);
    }
}
