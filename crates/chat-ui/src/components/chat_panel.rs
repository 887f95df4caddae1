use crate::components::{AnswerCard, LoadingIndicator};
use crate::store::ChatStore;
use crate::styles::{
    CONTAINER_BG, FLEX_CENTER_GAP_2, FLEX_COL_GAP_4, INPUT_BASE, INPUT_COLORS, PRIMARY_BUTTON,
    ROUNDED_STANDARD, SECONDARY_BUTTON, STANDARD_PADDING, combine_styles,
};
use kbchat_core::view::RESET_LABEL;
use kbchat_core::{ChatAction, ChatConfig};
use kbchat_http::QaClient;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatPanelProps {
    pub config: ChatConfig,
    #[prop_or_default]
    pub class: Classes,
}

/// Single-question chat: input, submit and reset controls, answer and sources
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let ChatPanelProps { config, class } = props;

    let store = {
        let max_message_chars = config.max_message_chars;
        use_reducer(move || ChatStore::new(max_message_chars))
    };
    let client = use_memo(config.clone(), |config| {
        QaClient::from_config(config).map_err(|e| {
            tracing::error!(error = %e, "Chat client is misconfigured");
            e.to_string()
        })
    });

    let on_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(ChatAction::Edit(input.value()));
        })
    };

    let on_submit = {
        let store = store.clone();
        let client = client.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(pending) = store.0.prepare_submit() else {
                return;
            };
            store.dispatch(ChatAction::Start(pending.clone()));

            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                let action = match &*client {
                    Ok(client) => client.completion(&pending).await,
                    Err(e) => ChatAction::Complete {
                        request: pending.request,
                        outcome: Err(e.clone()),
                    },
                };
                store.dispatch(action);
            });
        })
    };

    let on_reset = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            tracing::debug!("Resetting chat");
            store.dispatch(ChatAction::Reset);
        })
    };

    let view = store.0.view();

    html! {
        <div class={classes!("app-container", FLEX_COL_GAP_4, STANDARD_PADDING, CONTAINER_BG, ROUNDED_STANDARD, class.clone())}>
            <div class={combine_styles(&["input-container", FLEX_CENTER_GAP_2])}>
                <input
                    type="text"
                    class={combine_styles(&[INPUT_BASE, INPUT_COLORS])}
                    value={view.draft.clone()}
                    oninput={on_input}
                    placeholder={config.placeholder()}
                    maxlength={view.max_message_chars.to_string()}
                />
                <button
                    type="button"
                    class={combine_styles(&[PRIMARY_BUTTON, "shrink-0"])}
                    onclick={on_submit}
                    disabled={view.submit_disabled}
                >
                    {view.submit_label}
                </button>
                <button
                    type="button"
                    class={combine_styles(&[SECONDARY_BUTTON, "shrink-0"])}
                    onclick={on_reset}
                    disabled={view.reset_disabled}
                >
                    {RESET_LABEL}
                </button>
            </div>

            if view.loading {
                <LoadingIndicator />
            }

            if let Some(answer) = view.answer.clone() {
                <AnswerCard answer={answer} />
            }
        </div>
    }
}
