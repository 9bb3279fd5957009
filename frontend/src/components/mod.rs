// Reusable components live here.

pub mod alert_modal;
pub mod article_body;
pub mod article_editor;
pub mod header;
pub mod like_button;
pub mod loading_spinner;
pub mod preview_modal;
pub mod rich_text_editor;
pub mod save_animal_card;
