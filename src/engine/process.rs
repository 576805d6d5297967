//! One-shot subprocess exchange with the decoding engine

use super::DecodeEngine;
use crate::config::EngineConfig;
use crate::error::BridgeError;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Runs the external engine as a fresh child process for every submission.
///
/// The request is written to the child's stdin, which is then closed; stdout
/// and stderr are read to completion and the child is reaped before
/// [`submit`](DecoderProcess::submit) returns. Any stderr output is treated
/// as failure, whatever stdout contains.
#[derive(Debug, Clone)]
pub struct DecoderProcess {
    program: PathBuf,
    args: Vec<String>,
    check_exit_status: bool,
}

impl DecoderProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            check_exit_status: true,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            check_exit_status: config.check_exit_status,
        }
    }

    /// Replace the command-line arguments. The app takes them from
    /// [`EngineConfig::args`]; this is for embedding and wrapper scripts.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a non-success exit status without stderr output is a failure
    pub fn with_exit_status_check(mut self, enabled: bool) -> Self {
        self.check_exit_status = enabled;
        self
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Run one blocking request/response exchange.
    pub fn submit(&self, request: &[u8]) -> Result<Vec<u8>, BridgeError> {
        let started = Instant::now();
        tracing::debug!(
            "Spawning decoding engine {:?} with {} byte request",
            self.program,
            request.len()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| BridgeError::SpawnFailure {
                program: self.program.display().to_string(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("engine stdin was not captured"))?;

        // Feed stdin from a helper thread so a large document cannot fill the
        // pipe while the engine is blocked writing its own output.
        let (write_result, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || {
                let result = stdin.write_all(request);
                drop(stdin);
                result
            });
            let output = child.wait_with_output();
            let write_result = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (write_result, output)
        });
        let output = output?;

        tracing::debug!(
            "Decoding engine exited with {} after {:?} ({} bytes stdout, {} bytes stderr)",
            output.status,
            started.elapsed(),
            output.stdout.len(),
            output.stderr.len()
        );

        if !output.stderr.is_empty() {
            let message = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!("Decoding engine reported failure: {}", message.trim_end());
            return Err(BridgeError::ExternalFailure(message));
        }

        if self.check_exit_status && !output.status.success() {
            tracing::warn!("Decoding engine exited with {}", output.status);
            return Err(BridgeError::AbnormalExit {
                code: output.status.code(),
            });
        }

        write_result?;
        Ok(output.stdout)
    }
}

impl DecodeEngine for DecoderProcess {
    fn submit(&self, request: &[u8]) -> Result<Vec<u8>, BridgeError> {
        DecoderProcess::submit(self, request)
    }
}
