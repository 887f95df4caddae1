//! Chat state and its transitions
//!
//! All UI state lives in a single [`ChatState`] value. The UI mutates it only
//! through the transitions below, either directly or via [`ChatAction`].
//!
//! Every dispatched request is tagged with a [`RequestId`]. A completion is
//! applied only while the state is still loading that same request, so a
//! response arriving after a reset is dropped instead of overwriting the
//! cleared state.

use crate::config::MAX_MESSAGE_CHARS;
use crate::types::{Answer, Citation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Answer text shown for any failed request
pub const FETCH_ERROR_MESSAGE: &str = "Error: Could not fetch the data.";

/// Identifier tagged onto each outbound request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// A request that has been approved by the state machine and should be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub request: RequestId,
    pub query: String,
    /// Prior session identifier, empty when no session exists yet
    pub session: String,
}

impl PendingQuery {
    /// Query string parameters for the outbound GET
    pub fn query_params(&self) -> [(&'static str, &str); 2] {
        [("query", &self.query), ("session", &self.session)]
    }
}

/// Whether a request is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request: RequestId,
    },
}

/// What happened to a completion handed to [`ChatState::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// The answer, session and citations were stored
    Answered,
    /// The fixed error message was stored
    Failed,
    /// The completion did not belong to the loading request and was ignored
    Discarded,
}

/// Named transitions, for UIs that drive the state through a reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Edit(String),
    Start(PendingQuery),
    Complete {
        request: RequestId,
        outcome: Result<Answer, String>,
    },
    Reset,
}

/// The whole state of the chat component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    draft: String,
    answer: String,
    citations: Vec<Citation>,
    session: String,
    phase: Phase,
    next_request: RequestId,
    max_message_chars: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(MAX_MESSAGE_CHARS)
    }
}

impl ChatState {
    /// Create an empty state whose draft is capped at `max_message_chars`
    pub fn new(max_message_chars: usize) -> Self {
        Self {
            draft: String::new(),
            answer: String::new(),
            citations: Vec::new(),
            session: String::new(),
            phase: Phase::Idle,
            next_request: RequestId::default(),
            max_message_chars,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub const fn max_message_chars(&self) -> usize {
        self.max_message_chars
    }

    /// Replace the draft, keeping at most `max_message_chars` characters
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if let Some((cut, _)) = text.char_indices().nth(self.max_message_chars) {
            text.truncate(cut);
        }
        self.draft = text;
    }

    /// Build the request a submit would send, without changing state.
    ///
    /// Returns `None` when the draft is empty or a request is already outstanding.
    pub fn prepare_submit(&self) -> Option<PendingQuery> {
        if self.draft.is_empty() || self.is_loading() {
            return None;
        }

        Some(PendingQuery {
            request: self.next_request,
            query: self.draft.clone(),
            session: self.session.clone(),
        })
    }

    /// Enter the loading phase for a prepared request.
    ///
    /// Returns `false` and leaves the state untouched if a request is already
    /// outstanding or the query was prepared against an older state.
    pub fn start(&mut self, pending: &PendingQuery) -> bool {
        if self.is_loading() || pending.request != self.next_request {
            warn!(request = %pending.request, "Ignoring submit while another request is pending");
            return false;
        }

        debug!(request = %pending.request, has_session = !pending.session.is_empty(), "Dispatching query");
        self.phase = Phase::Loading {
            request: pending.request,
        };
        self.next_request = self.next_request.next();
        true
    }

    /// Prepare and start a submit in one step
    pub fn submit(&mut self) -> Option<PendingQuery> {
        let pending = self.prepare_submit()?;
        self.start(&pending).then_some(pending)
    }

    /// Apply the outcome of a request.
    ///
    /// On failure only the answer text changes: citations and session from an
    /// earlier success stay in place.
    pub fn complete<E: fmt::Display>(
        &mut self,
        request: RequestId,
        outcome: Result<Answer, E>,
    ) -> CompletionStatus {
        if self.phase != (Phase::Loading { request }) {
            warn!(%request, phase = ?self.phase, "Discarding stale completion");
            return CompletionStatus::Discarded;
        }

        self.phase = Phase::Idle;
        match outcome {
            Ok(answer) => {
                debug!(%request, citations = answer.citations.len(), "Query answered");
                self.answer = answer.text;
                self.session = answer.session_id;
                self.citations = answer.citations;
                CompletionStatus::Answered
            }
            Err(err) => {
                warn!(%request, error = %err, "Query failed");
                self.answer = FETCH_ERROR_MESSAGE.to_string();
                CompletionStatus::Failed
            }
        }
    }

    /// Clear everything the user or the service has contributed
    pub fn reset(&mut self) {
        self.draft.clear();
        self.answer.clear();
        self.citations.clear();
        self.session.clear();
        self.phase = Phase::Idle;
    }

    /// Apply a reducer action
    pub fn apply(&mut self, action: ChatAction) {
        match action {
            ChatAction::Edit(text) => self.set_draft(text),
            ChatAction::Start(pending) => {
                self.start(&pending);
            }
            ChatAction::Complete { request, outcome } => {
                self.complete(request, outcome);
            }
            ChatAction::Reset => self.reset(),
        }
    }
}
