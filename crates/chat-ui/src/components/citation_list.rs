use crate::styles::{FLEX_COL_GAP_2, MUTED_TEXT, PRIMARY_BORDER, SECONDARY_TEXT, combine_styles};
use kbchat_core::CitationView;
use kbchat_core::view::CITATIONS_HEADING;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CitationListProps {
    pub citations: Vec<CitationView>,
    #[prop_or_default]
    pub class: Classes,
}

/// Labeled list of the sources backing an answer
#[function_component(CitationList)]
pub fn citation_list(props: &CitationListProps) -> Html {
    let CitationListProps { citations, class } = props;

    html! {
        <div class={classes!("citations-container", "border-t", PRIMARY_BORDER, "pt-4", class.clone())}>
            <h4 class={combine_styles(&["font-semibold", "text-sm", "mb-2", SECONDARY_TEXT])}>
                {CITATIONS_HEADING}
            </h4>
            <ul class={FLEX_COL_GAP_2}>
                {for citations.iter().enumerate().map(|(index, citation)| {
                    html! {
                        <li key={index}>
                            <div class={combine_styles(&["citation-text", "italic", SECONDARY_TEXT])}>
                                {citation.quote.clone()}
                            </div>
                            <div class={combine_styles(&["file-name", "text-xs", MUTED_TEXT])}>
                                {citation.file_label.clone()}
                            </div>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
