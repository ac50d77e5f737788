use actix_session::Session;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::errors::AppError;
use crate::i18n::{LANG_COOKIE, Lang};

#[derive(Deserialize)]
pub struct LangForm {
    pub lang: String,
    pub csrf_token: String,
    /// Path to return to; anything not an in-app path falls back to /.
    #[serde(default)]
    pub next: String,
}

/// POST /lang — persist the visitor's language preference. The cookie is
/// what the localization resolver honors ahead of the request headers.
pub async fn set_language(
    session: Session,
    form: web::Form<LangForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let next = if form.next.starts_with('/') && !form.next.starts_with("//") {
        form.next.as_str()
    } else {
        "/"
    };

    let mut response = HttpResponse::SeeOther();
    response.insert_header(("Location", next));

    // A value outside the supported set is ignored rather than stored.
    if let Some(lang) = Lang::from_code(&form.lang) {
        let cookie = Cookie::build(LANG_COOKIE, lang.code())
            .path("/")
            .max_age(Duration::days(365))
            .same_site(SameSite::Lax)
            .finish();
        response.cookie(cookie);
    }

    Ok(response.finish())
}
