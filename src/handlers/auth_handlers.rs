use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::auth::provider::IdentityClient;
use crate::auth::{csrf, session as session_state};
use crate::config::Config;
use crate::errors::AppError;
use crate::i18n;
use crate::templates_structs::ShellConfig;

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// GET /login — hand the visitor to the identity provider.
pub async fn login(
    identity: web::Data<IdentityClient>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let redirect_uri = format!("{}/auth/callback", config.public_base_url);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", identity.authorize_url(&redirect_uri)))
        .finish())
}

/// GET /auth/callback — exchange the provider's code for an access token
/// and keep it in the cookie session. The token is re-validated with the
/// provider on every subsequent request.
pub async fn callback(
    req: HttpRequest,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
    session: Session,
    query: web::Query<CallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let token = identity.exchange_code(&query.code).await?;
    session_state::store_token(&session, &token);

    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let cookie = req.cookie(i18n::LANG_COOKIE);
    let lang = i18n::resolve_language(accept_language, cookie.as_ref().map(|c| c.value()));
    session_state::set_flash(&session, &shell.locales.lookup(lang, "logged-in"));

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish())
}

/// POST /logout
pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish())
}
