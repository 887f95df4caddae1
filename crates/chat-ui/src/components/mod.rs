mod answer_card;
mod chat_panel;
mod citation_list;
mod loading_indicator;

pub use answer_card::AnswerCard;
pub use chat_panel::ChatPanel;
pub use citation_list::CitationList;
pub use loading_indicator::LoadingIndicator;
