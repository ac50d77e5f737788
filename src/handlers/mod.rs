pub mod agenda_handlers;
pub mod auth_handlers;
pub mod lang_handlers;
pub mod meeting_handlers;
pub mod user_handlers;
