//! Error handling for trellis-view
//!
//! Each stage of a submission has its own error type so callers can tell
//! where it failed:
//!
//! - [`InputValidationError`] - the form contents were rejected before any
//!   process was spawned
//! - [`BridgeError`] - the engine process could not be run or reported failure
//! - [`ProtocolError`] - the engine's output failed schema or invariant checks
//!
//! [`TrellisError`] wraps all of them, together with configuration and
//! channel errors, behind a single [`Result`] alias.

use thiserror::Error;

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputValidationError {
    /// A sequence field contains something other than '0' or '1'
    #[error("{field}: character {found:?} at position {position} is not '0' or '1'")]
    NonBinary {
        field: String,
        position: usize,
        found: char,
    },

    /// A required sequence field is empty
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// The probability field is not a number
    #[error("error probability {0:?} is not a number")]
    InvalidProbability(String),

    /// The probability is outside the open interval (0, 1)
    #[error("error probability {0} must satisfy 0 < p < 1")]
    ProbabilityOutOfRange(f64),
}

/// Failure to run the external decoding engine
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The engine executable could not be started
    #[error("failed to start decoding engine {program:?}: {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine wrote to its diagnostic stream; the text is kept verbatim
    #[error("{0}")]
    ExternalFailure(String),

    /// The engine exited unsuccessfully without any diagnostic output
    #[error("decoding engine exited abnormally (status: {})", exit_status_label(.code))]
    AbnormalExit { code: Option<i32> },

    /// Pipe I/O with the engine failed
    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// The engine's output failed structural or invariant validation
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The output is not a JSON document
    #[error("malformed engine output: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required field is absent
    #[error("missing field `{0}` in engine output")]
    MissingField(String),

    /// A field has the wrong JSON shape
    #[error("field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// Memory length or tail boundary is inconsistent
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An integer other than 0 or 1 where a bit is expected
    #[error("field `{field}` element {index} is {value}, expected 0 or 1")]
    InvalidBit {
        field: String,
        index: usize,
        value: serde_json::Number,
    },

    /// A request could not be serialized
    #[error("cannot encode request: {0}")]
    Encoding(String),
}

/// Main error type for trellis-view operations
#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputValidationError),

    #[error("Engine error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to channel communication
    #[error("Channel error: {0}")]
    Channel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrellisError {
    /// Short heading used when the error is shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            TrellisError::Input(_) => "Invalid input",
            TrellisError::Bridge(_) => "Decoding engine failed",
            TrellisError::Protocol(_) => "Unexpected engine output",
            TrellisError::Config(_) => "Configuration error",
            TrellisError::Channel(_) | TrellisError::Io(_) => "Internal error",
        }
    }
}

/// Result type alias for trellis-view operations
pub type Result<T> = std::result::Result<T, TrellisError>;
