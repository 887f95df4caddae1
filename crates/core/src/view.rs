//! Render model for the chat component
//!
//! [`ChatView`] is a pure function of [`ChatState`]. UI crates map it onto
//! markup without making any display decisions of their own.

use crate::state::ChatState;

pub const SUBMIT_LABEL: &str = "Submit";
pub const LOADING_LABEL: &str = "Loading...";
pub const RESET_LABEL: &str = "Reset";
pub const CITATIONS_HEADING: &str = "Data sources:";

/// Everything the component needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub draft: String,
    pub max_message_chars: usize,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub reset_disabled: bool,
    pub loading: bool,
    /// Present only when there is answer text to show
    pub answer: Option<AnswerView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub text: String,
    /// Empty when the answer has no citations; the list is then not rendered
    pub citations: Vec<CitationView>,
}

/// One rendered citation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationView {
    /// Citation text wrapped in double quotes
    pub quote: String,
    /// `File: <name>`
    pub file_label: String,
}

impl From<&ChatState> for ChatView {
    fn from(state: &ChatState) -> Self {
        let loading = state.is_loading();

        let answer = (!state.answer().is_empty()).then(|| AnswerView {
            text: state.answer().to_string(),
            citations: state
                .citations()
                .iter()
                .map(|citation| CitationView {
                    quote: format!("\"{}\"", citation.text),
                    file_label: format!("File: {}", citation.file_name()),
                })
                .collect(),
        });

        Self {
            draft: state.draft().to_string(),
            max_message_chars: state.max_message_chars(),
            submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
            submit_disabled: loading,
            reset_disabled: loading,
            loading,
            answer,
        }
    }
}

impl ChatState {
    /// Compute the render model for the current state
    pub fn view(&self) -> ChatView {
        ChatView::from(self)
    }
}

impl AnswerView {
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}
