//! Engine worker thread
//!
//! Owns a [`DecodeEngine`] and processes [`EngineCommand`]s one at a time.
//! Each submission is encoded, exchanged with the engine and decoded here,
//! so the UI thread only ever sees a validated [`DecodeResponse`] or an
//! error.

use super::{DecodeEngine, EngineCommand, EngineMessage};
use crate::error::Result;
use crate::protocol::{decode_response, encode_request};
use crate::types::{DecodeRequest, DecodeResponse};
use crossbeam_channel::{Receiver, Sender};
use std::time::Instant;

/// The worker loop that runs engine submissions off the UI thread
pub struct EngineWorker<E> {
    engine: E,
    cmd_rx: Receiver<EngineCommand>,
    msg_tx: Sender<EngineMessage>,
}

impl<E: DecodeEngine> EngineWorker<E> {
    pub fn new(engine: E, cmd_rx: Receiver<EngineCommand>, msg_tx: Sender<EngineMessage>) -> Self {
        Self {
            engine,
            cmd_rx,
            msg_tx,
        }
    }

    /// Run until a `Shutdown` command arrives or the UI side is dropped.
    pub fn run(self) {
        tracing::debug!("Engine worker started");

        while let Ok(command) = self.cmd_rx.recv() {
            match command {
                EngineCommand::Submit { id, request } => {
                    let started = Instant::now();
                    let result = self.exchange(&request);
                    match &result {
                        Ok(response) => tracing::info!(
                            "Submission {} completed in {:?} with {} candidate paths",
                            id,
                            started.elapsed(),
                            response.paths.len()
                        ),
                        Err(e) => tracing::warn!("Submission {} failed: {}", id, e),
                    }

                    if self
                        .msg_tx
                        .send(EngineMessage::Completed { id, result })
                        .is_err()
                    {
                        tracing::error!("UI side of the engine bridge is gone");
                        return;
                    }
                }
                EngineCommand::Shutdown => break,
            }
        }

        let _ = self.msg_tx.send(EngineMessage::Shutdown);
        tracing::debug!("Engine worker stopped");
    }

    fn exchange(&self, request: &DecodeRequest) -> Result<DecodeResponse> {
        let bytes = encode_request(request)?;
        let output = self.engine.submit(&bytes)?;
        Ok(decode_response(&output)?)
    }
}
