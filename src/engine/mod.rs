//! Decoding engine integration
//!
//! The engine is an external executable. Talking to it blocks for the whole
//! lifetime of the child process, so the exchange runs on a dedicated worker
//! thread and the UI communicates with it over crossbeam channels:
//!
//! - [`EngineCommand`] - Messages sent from the UI to the worker
//! - [`EngineMessage`] - Completion messages sent back to the UI
//! - [`EngineBridge`] - UI-side handle for submitting and draining results
//! - [`EngineWorker`] - The loop that owns the engine and runs submissions
//! - [`DecoderProcess`] - The one-shot subprocess exchange itself
//!
//! # Example
//!
//! ```ignore
//! use trellis_view::engine::{DecoderProcess, EngineBridge};
//!
//! let (mut bridge, handle) = EngineBridge::spawn(DecoderProcess::new("./convolutional-code"))?;
//! let id = bridge.submit(request)?;
//!
//! // Later, from the event loop
//! for msg in bridge.drain() {
//!     if let EngineMessage::Completed { id, result } = msg {
//!         // accept or report
//!     }
//! }
//! ```

pub mod process;
pub mod worker;

pub use process::DecoderProcess;
pub use worker::EngineWorker;

use crate::error::{BridgeError, Result, TrellisError};
use crate::types::{DecodeRequest, DecodeResponse};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fmt;
use std::thread::JoinHandle;

/// Anything that can run one serialized request/response exchange.
#[cfg_attr(test, mockall::automock)]
pub trait DecodeEngine: Send {
    fn submit(&self, request: &[u8]) -> std::result::Result<Vec<u8>, BridgeError>;
}

/// Identifies one submission so stale replies can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands sent from the UI thread to the engine worker.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Run the engine once for this request
    Submit {
        id: SubmissionId,
        request: DecodeRequest,
    },
    /// Stop the worker loop
    Shutdown,
}

/// Messages sent from the engine worker to the UI thread.
#[derive(Debug)]
pub enum EngineMessage {
    /// A submission finished, successfully or not
    Completed {
        id: SubmissionId,
        result: Result<DecodeResponse>,
    },
    /// The worker loop has exited
    Shutdown,
}

/// UI-side handle for communicating with the engine worker.
pub struct EngineBridge {
    cmd_tx: Sender<EngineCommand>,
    msg_rx: Receiver<EngineMessage>,
    next_id: u64,
}

impl EngineBridge {
    /// Create a new bridge pair: `(bridge_for_ui, cmd_rx, msg_tx)`.
    ///
    /// The worker thread owns `cmd_rx` and `msg_tx`.
    pub fn new() -> (Self, Receiver<EngineCommand>, Sender<EngineMessage>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (msg_tx, msg_rx) = unbounded();
        (
            Self {
                cmd_tx,
                msg_rx,
                next_id: 0,
            },
            cmd_rx,
            msg_tx,
        )
    }

    /// Create a bridge and start an [`EngineWorker`] for `engine` on its own thread.
    pub fn spawn<E>(engine: E) -> Result<(Self, JoinHandle<()>)>
    where
        E: DecodeEngine + 'static,
    {
        let (bridge, cmd_rx, msg_tx) = Self::new();
        let worker = EngineWorker::new(engine, cmd_rx, msg_tx);
        let handle = std::thread::Builder::new()
            .name("decode-engine".to_string())
            .spawn(move || worker.run())?;
        Ok((bridge, handle))
    }

    /// Queue a request for the worker and return its id.
    pub fn submit(&mut self, request: DecodeRequest) -> Result<SubmissionId> {
        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.cmd_tx
            .send(EngineCommand::Submit { id, request })
            .map_err(|_| TrellisError::Channel("engine worker has stopped".to_string()))?;
        tracing::debug!("Queued submission {}", id);
        Ok(id)
    }

    /// Drain all pending messages.
    pub fn drain(&self) -> Vec<EngineMessage> {
        self.msg_rx.try_iter().collect()
    }

    /// Block until the next message arrives or the worker goes away.
    pub fn recv(&self) -> Option<EngineMessage> {
        self.msg_rx.recv().ok()
    }

    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}
