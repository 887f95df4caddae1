pub mod components;
pub mod store;
pub mod styles;

// Re-export main components
pub use components::{AnswerCard, ChatPanel, CitationList, LoadingIndicator};
pub use store::ChatStore;
