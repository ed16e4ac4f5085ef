pub mod help_modal;
pub mod performer_modal;
pub mod search_bar;
pub mod status_bar;
