//! kb-chat core types and state
//!
//! Platform-neutral pieces of the question-answering front end: the wire
//! format of the endpoint, the chat state machine and the render model
//! derived from it.

pub mod config;
pub mod error;
pub mod state;
pub mod types;
pub mod view;

pub use config::{ChatConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, MAX_MESSAGE_CHARS};
pub use error::{CoreError, CoreResult};
pub use state::{
    ChatAction, ChatState, CompletionStatus, FETCH_ERROR_MESSAGE, PendingQuery, Phase, RequestId,
};
pub use types::{Answer, Citation, QueryResponse};
pub use view::{AnswerView, ChatView, CitationView};
