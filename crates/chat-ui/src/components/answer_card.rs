use crate::components::CitationList;
use crate::styles::{
    CARD_BG, CARD_PADDING, CARD_SHADOW, ERROR_BG, ERROR_BORDER, ERROR_TEXT, FLEX_COL_GAP_4,
    PRIMARY_BORDER, PRIMARY_TEXT, ROUNDED_STANDARD,
};
use kbchat_core::{AnswerView, FETCH_ERROR_MESSAGE};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnswerCardProps {
    pub answer: AnswerView,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnswerCard)]
pub fn answer_card(props: &AnswerCardProps) -> Html {
    let AnswerCardProps { answer, class } = props;

    let colors = if answer.text == FETCH_ERROR_MESSAGE {
        classes!(ERROR_BG, ERROR_TEXT, "border", ERROR_BORDER)
    } else {
        classes!(CARD_BG, PRIMARY_TEXT, "border", PRIMARY_BORDER)
    };

    html! {
        <div class={classes!("response-container", FLEX_COL_GAP_4, CARD_PADDING, CARD_SHADOW, ROUNDED_STANDARD, colors, class.clone())}>
            <div class="answer-text whitespace-pre-wrap">
                <p>{answer.text.clone()}</p>
            </div>
            if answer.has_citations() {
                <CitationList citations={answer.citations.clone()} />
            }
        </div>
    }
}
