//! Application object
//!
//! [`Workbench`] owns everything one running viewer needs: the engine
//! bridge, the current [`Session`] (at most one), the pending submission and
//! the last error to show. It knows nothing about the GUI toolkit; the
//! frontend turns clicks into [`AppAction`]s and reads state back.

use crate::engine::{EngineBridge, EngineMessage, SubmissionId};
use crate::error::{Result, TrellisError};
use crate::input::DecodeForm;
use crate::session::Session;
use crate::types::DecodeResponse;

/// Actions the user can trigger
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Validate the form and send it to the engine
    Submit(DecodeForm),
    /// Reveal one more candidate path
    Advance,
    /// Hide the most recently revealed candidate path
    Retreat,
    /// Acknowledge the error notification
    DismissError,
    /// Drop the current session
    CloseSession,
}

/// The viewer's single source of truth
pub struct Workbench {
    engine: EngineBridge,
    session: Option<Session>,
    pending: Option<SubmissionId>,
    last_error: Option<TrellisError>,
}

impl Workbench {
    pub fn new(engine: EngineBridge) -> Self {
        Self {
            engine,
            session: None,
            pending: None,
            last_error: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a submission is waiting for the engine
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_error(&self) -> Option<&TrellisError> {
        self.last_error.as_ref()
    }

    /// Apply a user action. Failures end up in [`last_error`](Self::last_error).
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Submit(form) => {
                if let Err(e) = self.submit(&form) {
                    tracing::warn!("Submission rejected: {}", e);
                    self.last_error = Some(e);
                }
            }
            AppAction::Advance => {
                if let Some(session) = self.session.as_mut() {
                    let count = session.advance();
                    tracing::debug!("Revealed {} of {} paths", count, session.paths().len());
                }
            }
            AppAction::Retreat => {
                if let Some(session) = self.session.as_mut() {
                    let count = session.retreat();
                    tracing::debug!("Revealed {} of {} paths", count, session.paths().len());
                }
            }
            AppAction::DismissError => self.last_error = None,
            AppAction::CloseSession => self.session = None,
        }
    }

    /// Validate the form and queue it for the engine.
    ///
    /// A newer submission supersedes one that is still running; the older
    /// reply is discarded when it arrives.
    pub fn submit(&mut self, form: &DecodeForm) -> Result<SubmissionId> {
        let request = form.to_request()?;
        let id = self.engine.submit(request)?;
        if let Some(previous) = self.pending.replace(id) {
            tracing::info!("Submission {} superseded by {}", previous, id);
        }
        self.last_error = None;
        Ok(id)
    }

    /// Drain worker messages. Returns true if anything arrived.
    pub fn process_engine_messages(&mut self) -> bool {
        let messages = self.engine.drain();
        let had_messages = !messages.is_empty();

        for msg in messages {
            match msg {
                EngineMessage::Completed { id, result } => self.complete(id, result),
                EngineMessage::Shutdown => {
                    tracing::info!("Engine worker shutdown received");
                    if self.pending.take().is_some() {
                        self.last_error = Some(TrellisError::Channel(
                            "engine worker stopped before replying".to_string(),
                        ));
                    }
                }
            }
        }

        had_messages
    }

    fn complete(&mut self, id: SubmissionId, result: Result<DecodeResponse>) {
        if self.pending != Some(id) {
            tracing::debug!("Dropping reply for superseded submission {}", id);
            return;
        }
        self.pending = None;

        match result.and_then(|response| Session::accept(response).map_err(Into::into)) {
            Ok(session) => {
                self.session = Some(session);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Submission {} failed: {}", id, e);
                self.last_error = Some(e);
            }
        }
    }

    /// Ask the engine worker to stop
    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}
