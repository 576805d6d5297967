//! Stand-in decoding engines

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use trellis_view::engine::DecodeEngine;
use trellis_view::error::BridgeError;
use trellis_view::protocol::encode_response;
use trellis_view::types::DecodeResponse;

/// What a [`StubEngine`] answers with
#[derive(Clone)]
pub enum StubReply {
    Output(Vec<u8>),
    Stderr(String),
}

impl StubReply {
    pub fn response(response: &DecodeResponse) -> Self {
        StubReply::Output(encode_response(response).expect("stub response must encode"))
    }
}

/// In-process engine that answers from a queue of canned replies and counts
/// calls. The last reply repeats once the queue runs down to it.
#[derive(Clone)]
pub struct StubEngine {
    replies: Arc<Mutex<VecDeque<StubReply>>>,
    calls: Arc<AtomicUsize>,
}

impl StubEngine {
    pub fn responding(response: &DecodeResponse) -> Self {
        Self::with_reply(StubReply::response(response))
    }

    pub fn with_reply(reply: StubReply) -> Self {
        Self::with_replies(vec![reply])
    }

    pub fn with_replies(replies: Vec<StubReply>) -> Self {
        assert!(!replies.is_empty(), "stub engine needs at least one reply");
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter; survives the engine being moved to the worker
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn next_reply(&self) -> StubReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies[0].clone()
        }
    }
}

impl DecodeEngine for StubEngine {
    fn submit(&self, _request: &[u8]) -> Result<Vec<u8>, BridgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_reply() {
            StubReply::Output(bytes) => Ok(bytes),
            StubReply::Stderr(message) => Err(BridgeError::ExternalFailure(message)),
        }
    }
}
