//! Yew reducer wrapper around [`ChatState`]

use kbchat_core::{ChatAction, ChatState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatStore(pub ChatState);

impl ChatStore {
    pub fn new(max_message_chars: usize) -> Self {
        Self(ChatState::new(max_message_chars))
    }
}

impl Reducible for ChatStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}
