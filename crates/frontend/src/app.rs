use kbchat_chat_ui::ChatPanel;
use kbchat_chat_ui::styles::{MUTED_TEXT, PRIMARY_TEXT, combine_styles};
use kbchat_core::ChatConfig;
use yew::prelude::*;

/// Endpoint baked in at build time, e.g. `KBCHAT_API_URL=https://... trunk build`
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("KBCHAT_API_URL");

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let config = ChatConfig::from_endpoint_override(ENDPOINT_OVERRIDE);
        tracing::info!(endpoint = %config.endpoint, timeout = ?config.timeout, "Loaded chat configuration");
        config
    });

    html! {
        <div class="min-h-screen w-screen flex flex-col bg-gray-100 dark:bg-gray-900">
            <header class="flex items-center justify-between p-4 bg-white dark:bg-gray-800 shadow-sm">
                <h1 class={combine_styles(&["text-2xl", "font-bold", PRIMARY_TEXT])}>{"Knowledge Base Chat"}</h1>
                <span class={combine_styles(&["text-xs", MUTED_TEXT])}>{config.endpoint.clone()}</span>
            </header>
            <main class="flex-1 p-6">
                <div class="max-w-3xl mx-auto">
                    <ChatPanel config={(*config).clone()} />
                </div>
            </main>
        </div>
    }
}
