// Template context structures for askama templates, organized by domain.
// All types are re-exported: `use zjazd::templates_structs::*`

use std::sync::Arc;

use actix_session::Session;
use actix_web::HttpRequest;
use actix_web::http::header;

use crate::api::ApiClient;
use crate::auth::provider::IdentityClient;
use crate::auth::{csrf, session as session_state};
use crate::config::Theme;
use crate::errors::AppError;
use crate::i18n::{self, Lang, LocaleStore, SUPPORTED_LANGUAGES};
use crate::models::user::User;

/// Application-wide presentation configuration, built once at startup and
/// passed explicitly into every page's context.
#[derive(Clone)]
pub struct ShellConfig {
    pub app_name: String,
    pub theme: Theme,
    pub locales: Arc<LocaleStore>,
}

impl ShellConfig {
    pub fn new(app_name: impl Into<String>, theme: Theme, locales: Arc<LocaleStore>) -> Self {
        Self {
            app_name: app_name.into(),
            theme,
            locales,
        }
    }
}

pub struct NavLink {
    pub label: String,
    pub href: &'static str,
    pub is_active: bool,
}

/// Common context shared by all pages. Templates access these as
/// `ctx.lang`, `ctx.user`, `ctx.t("key")`, etc.
pub struct PageContext {
    pub lang: Lang,
    pub user: Option<User>,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub nav: Vec<NavLink>,
    pub current_path: String,
    shell: ShellConfig,
}

const NAV_ROUTES: [(&str, &str); 2] = [("nav-agenda", "/"), ("nav-meetings", "/meetings")];

impl PageContext {
    /// Compose the per-request state every page needs: resolved language,
    /// session user, flash, CSRF token, and navigation. Runs once per
    /// server-rendered request.
    pub async fn build(
        req: &HttpRequest,
        session: &Session,
        api: &ApiClient,
        identity: &IdentityClient,
        shell: &ShellConfig,
    ) -> Result<Self, AppError> {
        let accept_language = req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());
        let cookie = req.cookie(i18n::LANG_COOKIE);
        let lang = i18n::resolve_language(accept_language, cookie.as_ref().map(|c| c.value()));
        shell.locales.ensure(lang.code(), api).await;

        let user = session_state::resolve_user(session, identity).await?;
        let flash = session_state::take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let nav = build_nav(shell, lang, req.path());

        Ok(Self {
            lang,
            user,
            flash,
            csrf_token,
            nav,
            current_path: req.path().to_string(),
            shell: shell.clone(),
        })
    }

    pub fn t(&self, key: &str) -> String {
        self.shell.locales.lookup(self.lang, key)
    }

    pub fn theme(&self) -> &Theme {
        &self.shell.theme
    }

    pub fn app_name(&self) -> &str {
        &self.shell.app_name
    }

    pub fn languages(&self) -> &'static [Lang] {
        &SUPPORTED_LANGUAGES
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Longest-prefix match: only the most specific matching route is active.
fn build_nav(shell: &ShellConfig, lang: Lang, current_path: &str) -> Vec<NavLink> {
    let best_match_len = NAV_ROUTES
        .iter()
        .filter(|(_, href)| current_path.starts_with(href))
        .map(|(_, href)| href.len())
        .max()
        .unwrap_or(0);

    NAV_ROUTES
        .iter()
        .copied()
        .map(|(key, href)| NavLink {
            label: shell.locales.lookup(lang, key),
            href,
            is_active: href.len() == best_match_len && current_path.starts_with(href),
        })
        .collect()
}

mod agenda;
mod common;
mod meeting;
mod user;

pub use self::agenda::AgendaTemplate;
pub use self::common::NotFoundTemplate;
pub use self::meeting::{MeetingDetailTemplate, MeetingsListTemplate};
pub use self::user::UserProfileTemplate;
