pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod templates_structs;
pub mod ui;
